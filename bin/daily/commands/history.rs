//! History command - past challenges and whether you did them

use crate::style::*;
use anyhow::Result;
use daily_challenge::{ApiClient, SessionManager};

pub async fn run(api: &ApiClient, mut session: SessionManager, page: u32, page_size: u32) -> Result<()> {
    session.initialize().await;
    if !session.is_authenticated() {
        print_error("Not logged in. Run: daily login");
        std::process::exit(1);
    }

    let history = match api.challenge_history(page, page_size).await {
        Ok(history) => history,
        Err(err) => {
            print_error(&err.to_string());
            std::process::exit(1);
        }
    };

    print_header("Challenge History");

    if history.challenges.is_empty() {
        println!("  {}", style_dim("Nothing here yet."));
        return Ok(());
    }

    for challenge in &history.challenges {
        let marker = if challenge.user_submitted {
            style_green("✓")
        } else {
            style_gray("·")
        };
        let date = challenge
            .active_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "          ".to_string());
        println!(
            "  {} {}  {}  {} {}",
            marker,
            style_dim(&date),
            style_bold(&challenge.title),
            difficulty_label(challenge.difficulty),
            style_gray(&format!("{} pts", challenge.points)),
        );
    }

    println!();
    let pages = history.total.div_ceil(history.page_size.max(1));
    println!(
        "  {}",
        style_dim(&format!("page {}/{} ({} total)", history.page, pages.max(1), history.total))
    );
    Ok(())
}
