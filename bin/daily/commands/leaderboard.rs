//! Leaderboard command - top users by points

use crate::style::*;
use anyhow::Result;
use daily_challenge::ApiClient;

pub async fn run(api: &ApiClient, limit: usize) -> Result<()> {
    print_header("Leaderboard");

    let rows = match api.leaderboard(limit).await {
        Ok(rows) => rows,
        Err(err) => {
            print_error(&err.to_string());
            std::process::exit(1);
        }
    };

    if rows.is_empty() {
        println!("  {}", style_dim("No one on the board yet."));
        return Ok(());
    }

    println!(
        "  {:>4}  {:<20} {:>7} {:>8} {:>8}",
        style_gray("#"),
        style_gray("user"),
        style_gray("points"),
        style_gray("streak"),
        style_gray("longest"),
    );
    for row in rows {
        let medal = match row.rank {
            1 => style_yellow("🥇"),
            2 => style_gray("🥈"),
            3 => style_red("🥉"),
            _ => format!("{:>4}", row.rank),
        };
        println!(
            "  {:>4}  {:<20} {:>7} {:>8} {:>8}",
            medal, row.username, row.total_points, row.current_streak, row.longest_streak
        );
    }
    println!();
    Ok(())
}
