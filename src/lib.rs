//! # Feedbot Library
//!
//! A small command-line automation bot for Twitter/X: it polls an RSS/Atom
//! feed and posts new entries as tweets, and separately searches recent
//! tweets for configured keywords and retweets the matches. Duplicate actions
//! are suppressed through append-only, line-oriented log files.
//!
//! ## Features
//!
//! - RSS/Atom feed polling with `feed-rs`
//! - Twitter/X API v2 integration with OAuth 2.0 User Context authentication
//! - Flat-file duplicate suppression (one identifier per line)
//! - Keyword search with include/exclude word lists
//! - Structured logging
//!
//! ## Configuration
//!
//! Credentials come from the `xapi_access_token` and `xapi_user_id`
//! environment variables; operational settings (feed URL, log file paths,
//! keyword lists) have defaults and can be overridden via environment
//! variables documented on [`Settings`].
//!
//! ## Commands
//!
//! - `feedbot rss`: read the feed and post new items
//! - `feedbot rt`: search keywords and retweet new matches

pub mod bot;
pub mod config;
pub mod dedup;
pub mod feed;
pub mod twitter;

// Re-export commonly used types and functions
pub use bot::{read_feed_and_tweet, search_and_retweet};
pub use config::{Settings, TwitterConfig};
pub use dedup::DedupLog;
pub use feed::{compose_message, fetch_feed, parse_feed, shorten_text, FeedEntry};
pub use twitter::{
    build_search_query, post_tweet, retweet, search_tweets, ProviderError, ProviderErrorKind,
    Tweet,
};
