//! Countdown command - live timer to the next challenge

use crate::style::*;
use anyhow::Result;
use daily_challenge::countdown::Countdown;
use std::io::Write;

pub async fn run() -> Result<()> {
    print_header("Next Challenge In");

    let countdown = Countdown::start();
    let mut rx = countdown.subscribe();

    print!("  {}", style_bold(&countdown.current()));
    std::io::stdout().flush()?;

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                print!("\r  {}", style_bold(&rx.borrow().clone()));
                std::io::stdout().flush()?;
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }

    // Dropping the countdown cancels its timer.
    drop(countdown);
    Ok(())
}
