//! Configuration module for the feedbot command-line bot.
//!
//! This module contains the configuration structures and environment variable
//! handling for the bot. Configuration is loaded once at process start and
//! passed by reference into the components; it is never mutated afterwards.

use log::{debug, error, info, warn};
use std::env;

/// Default Twitter API base URL. Overridable via `xapi_base_url` for tests.
const DEFAULT_API_BASE_URL: &str = "https://api.x.com";

/// Operational settings for the bot.
///
/// All fields are loaded from environment variables with defaults, so the bot
/// can run unconfigured against the example feed. Word lists are read as
/// comma-separated values.
///
/// # Environment Variables
///
/// - `FEED_URL`: RSS/Atom feed to read and post from (default `http://example.net/feed/`)
/// - `POSTED_URLS_FILE`: log file recording tweeted feed links, one URL per line
///   (default `posted-urls.log`)
/// - `POSTED_RETWEETS_FILE`: log file recording retweeted tweet ids, one id per
///   line (default `posted-retweets.log`)
/// - `RETWEET_INCLUDE_WORDS`: comma-separated words to search for when
///   retweeting (default `#hashtag`)
/// - `RETWEET_EXCLUDE_WORDS`: comma-separated words to exclude from the search
///   (default empty)
/// - `MAX_TITLE_LENGTH`: truncation length for feed titles in composed tweets
///   (default 250)
/// - `SEARCH_COUNT`: maximum number of search results to request (default 10)
#[derive(Debug, Clone)]
pub struct Settings {
    /// RSS feed to read and post tweets from
    pub feed_url: String,
    /// Log file to save all tweeted RSS links (one URL per line)
    pub posted_urls_file: String,
    /// Log file to save all retweeted tweets (one tweet id per line)
    pub posted_retweets_file: String,
    /// Include tweets with these words when retweeting
    pub retweet_include_words: Vec<String>,
    /// Do not include tweets with these words when retweeting
    pub retweet_exclude_words: Vec<String>,
    /// Truncate feed titles beyond this many characters when composing a tweet
    pub max_title_length: usize,
    /// Maximum number of search results to request per run
    pub search_count: u32,
}

impl Settings {
    /// Loads settings from environment variables, falling back to defaults.
    ///
    /// This function never fails: every setting has a usable default, and
    /// unparseable numeric values fall back to the default with a warning.
    pub fn from_env() -> Self {
        let settings = Settings {
            feed_url: env::var("FEED_URL")
                .unwrap_or_else(|_| "http://example.net/feed/".to_string()),
            posted_urls_file: env::var("POSTED_URLS_FILE")
                .unwrap_or_else(|_| "posted-urls.log".to_string()),
            posted_retweets_file: env::var("POSTED_RETWEETS_FILE")
                .unwrap_or_else(|_| "posted-retweets.log".to_string()),
            retweet_include_words: words_from_env("RETWEET_INCLUDE_WORDS", &["#hashtag"]),
            retweet_exclude_words: words_from_env("RETWEET_EXCLUDE_WORDS", &[]),
            max_title_length: parse_from_env("MAX_TITLE_LENGTH", 250),
            search_count: parse_from_env("SEARCH_COUNT", 10),
        };

        debug!(
            "Settings loaded: feed_url={}, posted_urls_file={}, posted_retweets_file={}",
            settings.feed_url, settings.posted_urls_file, settings.posted_retweets_file
        );
        debug!(
            "Retweet settings: include={:?}, exclude={:?}, search_count={}",
            settings.retweet_include_words,
            settings.retweet_exclude_words,
            settings.search_count
        );

        settings
    }
}

/// Reads a comma-separated word list from an environment variable.
///
/// Empty items produced by stray commas or whitespace are dropped. When the
/// variable is not set, the provided default list is used.
fn words_from_env(name: &str, default: &[&str]) -> Vec<String> {
    match env::var(name) {
        Ok(value) => value
            .split(',')
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect(),
        Err(_) => default.iter().map(|word| word.to_string()).collect(),
    }
}

/// Reads a numeric setting from an environment variable with a default.
fn parse_from_env<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "Could not parse {} value '{}', using default {}",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

/// Configuration struct for Twitter/X API credentials.
///
/// This struct holds the credentials required to authenticate with the
/// Twitter/X API v2 endpoints. It uses OAuth 2.0 User Context (Access Token)
/// for all operations: posting tweets, searching tweets, and retweeting.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// The Access Token for OAuth 2.0 User Context authentication (all operations)
    pub access_token: String,
    /// The numeric user id of the bot account (required for retweeting)
    pub user_id: String,
    /// Base URL of the Twitter API, without a trailing slash
    pub api_base_url: String,
}

impl TwitterConfig {
    /// Creates a new `TwitterConfig` by loading credentials from environment
    /// variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `xapi_access_token`: Twitter API Access Token (OAuth 2.0 User Context)
    /// - `xapi_user_id`: numeric user id of the bot account
    ///
    /// # Optional Environment Variables
    ///
    /// - `xapi_base_url`: alternative API base URL (defaults to
    ///   `https://api.x.com`; useful for tests)
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: if the required environment variables are present
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: if a required
    ///   variable is missing or empty
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading Twitter configuration from environment variables");

        let access_token = match env::var("xapi_access_token") {
            Ok(token) => {
                if token.is_empty() {
                    error!("Access token is empty");
                    return Err("Access token cannot be empty".into());
                }
                info!(
                    "Found xapi_access_token environment variable with length: {}",
                    token.len()
                );
                debug!("Access token (masked): {}", mask_secret(&token));
                token
            }
            Err(e) => {
                error!("Failed to load xapi_access_token from environment: {}", e);
                error!("Make sure the xapi_access_token environment variable is set");
                return Err(
                    format!("Missing xapi_access_token environment variable: {}", e).into(),
                );
            }
        };

        let user_id = match env::var("xapi_user_id") {
            Ok(id) if !id.is_empty() => {
                info!("Found xapi_user_id environment variable");
                id
            }
            _ => {
                error!("Make sure the xapi_user_id environment variable is set");
                return Err("Missing xapi_user_id environment variable".into());
            }
        };

        let api_base_url = match env::var("xapi_base_url") {
            Ok(url) if !url.is_empty() => {
                warn!("Using non-default API base URL: {}", url);
                url.trim_end_matches('/').to_string()
            }
            _ => DEFAULT_API_BASE_URL.to_string(),
        };

        info!("Twitter configuration loaded successfully");

        Ok(TwitterConfig {
            access_token,
            user_id,
            api_base_url,
        })
    }

    /// Builds the Authorization header for OAuth 2.0 User Context
    /// authentication, as required by the Twitter API v2 endpoints.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feedbot::TwitterConfig;
    ///
    /// let config = TwitterConfig {
    ///     access_token: "your_access_token".to_string(),
    ///     user_id: "12345".to_string(),
    ///     api_base_url: "https://api.x.com".to_string(),
    /// };
    /// assert_eq!(config.auth_header(), "Bearer your_access_token");
    /// ```
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Masks a secret for logging, keeping at most the first and last 4 characters.
fn mask_secret(secret: &str) -> String {
    if secret.len() > 12 {
        format!("{}...{}", &secret[..4], &secret[secret.len() - 4..])
    } else if secret.len() > 4 {
        format!("{}...", &secret[..4])
    } else {
        "...".to_string()
    }
}
