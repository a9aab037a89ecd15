//! Login command - authenticate and store the session token

use crate::style::*;
use anyhow::Result;
use daily_challenge::SessionManager;
use dialoguer::{Input, Password};

pub async fn run(mut session: SessionManager) -> Result<()> {
    print_header("Log In");

    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let password = Password::new().with_prompt("  Password").interact()?;

    if let Err(err) = session.login(&email, &password).await {
        println!();
        print_error(&err.to_string());
        std::process::exit(1);
    }

    // Hydrate the snapshot; login itself only stores the credential.
    session.refresh().await;

    println!();
    match session.user() {
        Some(user) => {
            print_success(&format!("Welcome back, {}", style_bold(&user.username)));
            print_key_value("Streak", &streak_label(user.current_streak));
            print_key_value("Points", &user.total_points.to_string());
        }
        None => {
            print_success("Logged in");
            print_info("Could not load your profile right now; try `daily profile` later");
        }
    }
    Ok(())
}
