//! Register command - create an account

use crate::style::*;
use anyhow::Result;
use daily_challenge::ApiClient;
use dialoguer::{Input, Password};

pub async fn run(api: &ApiClient) -> Result<()> {
    print_header("Create Account");

    let username: String = Input::new()
        .with_prompt("  Username")
        .validate_with(|input: &String| {
            let ok = input.len() >= 3
                && input.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if ok {
                Ok(())
            } else {
                Err("3+ characters, letters/digits/underscore only")
            }
        })
        .interact_text()?;

    let email: String = Input::new().with_prompt("  Email").interact_text()?;

    let password = Password::new()
        .with_prompt("  Password")
        .with_confirmation("  Confirm password", "Passwords do not match")
        .interact()?;

    match api.register(&username, &email, &password).await {
        Ok(user) => {
            println!();
            print_success(&format!("Account created for {}", style_bold(&user.username)));
            print_info("Log in with: daily login");
            Ok(())
        }
        Err(err) => {
            println!();
            print_error(&err.to_string());
            std::process::exit(1);
        }
    }
}
