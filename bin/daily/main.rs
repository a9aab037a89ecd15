//! Daily Challenge CLI
//!
//! One challenge per day. Log in, read today's challenge, submit your one
//! answer before 00:00 UTC, and keep the streak alive.

mod commands;
mod style;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daily_challenge::{ApiClient, ChallengeFlow, ClientConfig, SessionManager, TokenStore};

#[derive(Parser)]
#[command(name = "daily", version, about = "Daily Challenge - one challenge per day")]
struct Cli {
    /// Backend API base URL (overrides config file)
    #[arg(long, env = "DAILY_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register,
    /// Log in and store the session token
    Login,
    /// Log out and clear the stored token
    Logout,
    /// Show today's challenge
    Today,
    /// Submit your answer for today's challenge
    Submit,
    /// Show your profile and stats
    Profile,
    /// Show the leaderboard
    Leaderboard {
        /// Number of rows to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show past challenges
    History {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Live countdown to the next challenge
    Countdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load();
    if let Some(url) = cli.api_url {
        config.api_url = url.trim_end_matches('/').to_string();
    }

    let tokens = TokenStore::new();
    let api = ApiClient::new(&config, tokens.clone());
    let session = SessionManager::new(api.clone(), tokens.clone());

    match cli.command {
        Commands::Register => commands::register::run(&api).await,
        Commands::Login => commands::login::run(session).await,
        Commands::Logout => commands::logout::run(session),
        Commands::Today => commands::today::run(ChallengeFlow::new(api, session)).await,
        Commands::Submit => commands::submit::run(ChallengeFlow::new(api, session)).await,
        Commands::Profile => commands::profile::run(session).await,
        Commands::Leaderboard { limit } => {
            commands::leaderboard::run(&api, limit.unwrap_or(config.leaderboard_limit)).await
        }
        Commands::History { page, page_size } => {
            commands::history::run(&api, session, page, page_size.unwrap_or(config.history_page_size)).await
        }
        Commands::Countdown => commands::countdown::run().await,
    }
}
