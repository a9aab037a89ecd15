//! Today command - show the current daily challenge

use crate::style::*;
use anyhow::Result;
use daily_challenge::countdown;
use daily_challenge::models::Challenge;
use daily_challenge::{ChallengeFlow, FlowState};

pub async fn run(mut flow: ChallengeFlow) -> Result<()> {
    flow.start().await;

    match flow.state() {
        FlowState::Redirecting => {
            print_error("Not logged in. Run: daily login");
            std::process::exit(1);
        }
        FlowState::LoadError(message) => {
            print_error(message);
            println!();
            println!(
                "  {}",
                style_dim("No challenge available today. Check back tomorrow at 00:00 UTC.")
            );
            std::process::exit(1);
        }
        FlowState::Ready => {}
        state => unreachable!("start() settled in {state:?}"),
    }

    print_header("Today's Challenge");
    println!(
        "  {} {}",
        style_gray("NEXT CHALLENGE IN"),
        style_bold(&countdown::current_display())
    );
    println!();

    if let Some(user) = flow.session().user() {
        print_key_value("Streak", &streak_label(user.current_streak));
        print_key_value("Points", &user.total_points.to_string());
        println!();
    }

    let challenge = flow.challenge().expect("Ready state holds a challenge");
    print_challenge(challenge);

    if challenge.user_submitted {
        print_success("Already submitted today. See you tomorrow.");
    } else {
        print_info("Submit with: daily submit");
    }
    Ok(())
}

pub fn print_challenge(challenge: &Challenge) {
    println!("  {}", style_bold(&challenge.title));
    println!(
        "  {}  {}  {}",
        difficulty_label(challenge.difficulty),
        style_cyan(challenge.category.as_str()),
        style_gray(&format!("{} pts", challenge.points)),
    );
    println!();
    for line in challenge.description.lines() {
        println!("  {line}");
    }
    if let Some(expected) = &challenge.expected_output {
        println!();
        print_key_value("Expected", expected);
    }
    println!();
}
