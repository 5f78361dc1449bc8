//! Tweet operations for the Twitter API v2.
//!
//! This module contains the functions for posting and retweeting tweets using
//! OAuth 2.0 User Context authentication.

use log::{debug, info};
use reqwest::Client;
use serde_json::json;

use crate::config::TwitterConfig;

use super::api::{execute_request, ProviderError};

/// Posts a tweet to Twitter/X using the API v2 endpoint.
///
/// # Parameters
///
/// - `config`: Twitter API credentials and base URL
/// - `client`: the shared HTTP client for this run
/// - `text`: the text content of the tweet to post
///
/// # Returns
///
/// - `Ok(String)`: the API response body on successful tweet posting
/// - `Err(ProviderError)`: a classified error if authentication fails, the
///   network fails, or the API rejects the tweet
///
/// # Example
///
/// ```rust,no_run
/// use feedbot::{post_tweet, TwitterConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let config = TwitterConfig::from_env().unwrap();
///     let client = reqwest::Client::new();
///     match post_tweet(&config, &client, "Hello from Rust!").await {
///         Ok(response) => println!("Tweet posted: {}", response),
///         Err(e) => eprintln!("Failed to post tweet: {}", e),
///     }
/// }
/// ```
pub async fn post_tweet(
    config: &TwitterConfig,
    client: &Client,
    text: &str,
) -> Result<String, ProviderError> {
    info!("Starting tweet post operation for text: '{}'", text);

    let url = format!("{}/2/tweets", config.api_base_url);
    let payload = json!({ "text": text });
    debug!("Request URL: {}", url);
    debug!("Request headers: Authorization: Bearer [REDACTED], Content-Type: application/json");

    let request_builder = client
        .post(&url)
        .header("Authorization", config.auth_header())
        .header("Content-Type", "application/json")
        .json(&payload);

    execute_request(request_builder, "post_tweet").await
}

/// Retweets an existing tweet under the bot's own account.
///
/// Uses the API v2 retweets endpoint, which takes the retweeting user's id in
/// the path and the target tweet id in the payload.
///
/// # Parameters
///
/// - `config`: Twitter API credentials and base URL (supplies the user id)
/// - `client`: the shared HTTP client for this run
/// - `tweet_id`: the id of the tweet to retweet
///
/// # Returns
///
/// - `Ok(String)`: the API response body on success
/// - `Err(ProviderError)`: a classified error on failure
pub async fn retweet(
    config: &TwitterConfig,
    client: &Client,
    tweet_id: &str,
) -> Result<String, ProviderError> {
    info!("Starting retweet operation for tweet id: {}", tweet_id);

    let url = format!("{}/2/users/{}/retweets", config.api_base_url, config.user_id);
    let payload = json!({ "tweet_id": tweet_id });
    debug!("Request URL: {}", url);
    debug!("Request headers: Authorization: Bearer [REDACTED], Content-Type: application/json");

    let request_builder = client
        .post(&url)
        .header("Authorization", config.auth_header())
        .header("Content-Type", "application/json")
        .json(&payload);

    execute_request(request_builder, "retweet").await
}
