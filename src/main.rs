//! # Feedbot
//!
//! Command-line entry point for the bot. Two subcommands map onto the two bot
//! operations; anything else, including no arguments at all, prints the usage
//! text.
//!
//! ## Example Usage
//!
//! ```bash
//! # Read the feed and post new items
//! feedbot rss
//!
//! # Search keywords and retweet new matches
//! feedbot rt
//!
//! # Show the help screen
//! feedbot help
//!
//! # Run with debug logging
//! RUST_LOG=debug feedbot rss
//! ```

use clap::{Parser, Subcommand};
use env_logger::Env;

use feedbot::bot::{read_feed_and_tweet, search_and_retweet};
use feedbot::config::{Settings, TwitterConfig};

#[derive(Parser)]
#[command(
    name = "feedbot",
    about = "Post new RSS feed items to Twitter/X and retweet keyword matches",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the feed and post new items to the configured account
    Rss,
    /// Search for the configured keywords and retweet new matches
    Rt,
}

/// Main entry point for the feedbot command-line bot.
///
/// Initializes logging, loads configuration once, and dispatches to the
/// requested operation. Per-item reports are emitted at the `info` level, so
/// the default log filter is `info` rather than `env_logger`'s usual `error`;
/// `RUST_LOG` still overrides it.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let config = TwitterConfig::from_env()?;

    match cli.command {
        Command::Rss => read_feed_and_tweet(&settings, &config).await?,
        Command::Rt => search_and_retweet(&settings, &config).await?,
    }

    Ok(())
}
