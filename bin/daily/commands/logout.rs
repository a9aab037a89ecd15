//! Logout command - clear the stored token

use crate::style::*;
use anyhow::Result;
use daily_challenge::SessionManager;

pub fn run(mut session: SessionManager) -> Result<()> {
    session.logout();
    print_success("Logged out");
    Ok(())
}
