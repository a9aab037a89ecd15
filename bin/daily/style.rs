//! Terminal styling helpers for CLI output

/// ANSI color codes
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;
use daily_challenge::models::Difficulty;

pub fn style_bold(s: &str) -> String {
    format!("{}{}{}", BOLD, s, RESET)
}

pub fn style_dim(s: &str) -> String {
    format!("{}{}{}", DIM, s, RESET)
}

pub fn style_red(s: &str) -> String {
    format!("{}{}{}", RED, s, RESET)
}

pub fn style_green(s: &str) -> String {
    format!("{}{}{}", GREEN, s, RESET)
}

pub fn style_yellow(s: &str) -> String {
    format!("{}{}{}", YELLOW, s, RESET)
}

pub fn style_cyan(s: &str) -> String {
    format!("{}{}{}", CYAN, s, RESET)
}

pub fn style_gray(s: &str) -> String {
    format!("{}{}{}", GRAY, s, RESET)
}

pub fn print_header(title: &str) {
    println!();
    println!("  {}", style_bold(title));
    println!("  {}", style_gray(&"─".repeat(title.len().max(24))));
    println!();
}

pub fn print_key_value(key: &str, value: &str) {
    println!("    {:<14} {}", style_gray(&format!("{key}:")), value);
}

pub fn print_success(msg: &str) {
    println!("  {} {}", style_green("✓"), msg);
}

pub fn print_error(msg: &str) {
    println!("  {} {}", style_red("✗"), msg);
}

pub fn print_info(msg: &str) {
    println!("  {} {}", style_cyan("→"), msg);
}

/// Difficulty label colored the way the site colors its badges.
pub fn difficulty_label(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => style_green("easy"),
        Difficulty::Medium => style_yellow("medium"),
        Difficulty::Hard => style_red("hard"),
    }
}

/// Streak display with the fire marker for active streaks.
pub fn streak_label(streak: u32) -> String {
    if streak > 0 {
        format!("🔥 {streak}")
    } else {
        streak.to_string()
    }
}
