//! Profile command - your stats as the backend sees them

use crate::style::*;
use anyhow::Result;
use daily_challenge::SessionManager;

pub async fn run(mut session: SessionManager) -> Result<()> {
    session.initialize().await;

    let Some(user) = session.user() else {
        print_error("Not logged in. Run: daily login");
        std::process::exit(1);
    };

    print_header("Profile");
    print_key_value("Username", &style_bold(&user.username));
    print_key_value("Email", &user.email);
    println!();
    print_key_value("Streak", &streak_label(user.current_streak));
    print_key_value("Longest", &user.longest_streak.to_string());
    print_key_value("Points", &user.total_points.to_string());
    print_key_value("Submissions", &user.total_submissions.to_string());
    if let Some(rank) = user.rank {
        print_key_value("Rank", &format!("#{rank}"));
    }
    if let Some(date) = user.last_completed_date {
        print_key_value("Last done", &date.to_string());
    }
    println!();
    Ok(())
}
