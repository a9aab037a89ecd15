//! Submit command - one answer for today's challenge, no take-backs

use crate::commands::today::print_challenge;
use crate::style::*;
use anyhow::Result;
use daily_challenge::models::{Category, SubmissionType};
use daily_challenge::{ChallengeFlow, FlowState};
use dialoguer::{Confirm, Editor, Select};

pub async fn run(mut flow: ChallengeFlow) -> Result<()> {
    flow.start().await;

    match flow.state() {
        FlowState::Redirecting => {
            print_error("Not logged in. Run: daily login");
            std::process::exit(1);
        }
        FlowState::LoadError(message) => {
            print_error(message);
            std::process::exit(1);
        }
        FlowState::Ready => {}
        state => unreachable!("start() settled in {state:?}"),
    }

    print_header("Submit Your Answer");
    let challenge = flow.challenge().expect("Ready state holds a challenge").clone();
    print_challenge(&challenge);

    if !flow.open_submit() {
        print_error("You already submitted for this challenge. One submission per day.");
        std::process::exit(1);
    }

    println!("  {}", style_yellow("You can only submit once. No take-backs."));
    println!();

    loop {
        fill_draft(&mut flow, &challenge)?;
        flow.submit().await;

        match flow.state().clone() {
            FlowState::SubmitSuccess => break,
            FlowState::SubmitOpen => {
                // Validation failure; message is on the form.
                if let Some(message) = flow.form_error() {
                    print_error(message);
                }
            }
            FlowState::SubmitError(message) => print_error(&message),
            FlowState::Redirecting => {
                print_error("Session expired, please log in again");
                std::process::exit(1);
            }
            state => unreachable!("submit() settled in {state:?}"),
        }

        println!();
        if !Confirm::new().with_prompt("  Try again?").default(true).interact()? {
            flow.cancel_submit();
            print_info("Submission cancelled. Your day, your call.");
            return Ok(());
        }
    }

    let result = flow.take_result().expect("success state carries a result");
    println!();
    print_success(&format!(
        "{} You earned {} points.",
        style_bold("SUBMITTED!"),
        result.points_awarded
    ));

    if let Some(user) = flow.session().user() {
        print_key_value("Streak", &streak_label(user.current_streak));
        print_key_value("Points", &user.total_points.to_string());
        if user.current_streak >= 7 {
            print_info("Includes streak bonus!");
        }
    }
    Ok(())
}

/// Prompt for the draft fields appropriate to the challenge's category.
fn fill_draft(flow: &mut ChallengeFlow, challenge: &daily_challenge::models::Challenge) -> Result<()> {
    if challenge.category == Category::Life {
        let completed = Confirm::new()
            .with_prompt("  I completed this challenge (honestly)")
            .default(false)
            .interact()?;
        flow.set_completed(completed);
        return Ok(());
    }

    let kinds = ["text", "code"];
    let selected = Select::new()
        .with_prompt("  Submission type")
        .items(&kinds)
        .default(0)
        .interact()?;
    let submission_type = if selected == 1 {
        SubmissionType::Code
    } else {
        SubmissionType::Text
    };
    flow.set_submission_type(submission_type);

    let placeholder = match submission_type {
        SubmissionType::Code => "# Paste your code here\n",
        _ => "Enter your answer here\n",
    };
    let content = Editor::new().edit(placeholder)?.unwrap_or_default();
    flow.set_content(content);
    Ok(())
}
