//! Tweet search functionality for the Twitter API v2.

use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;

use crate::config::TwitterConfig;

use super::api::{execute_request, ProviderError, ProviderErrorKind};

/// A tweet returned by the recent-search endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Tweet {
    /// The tweet id, used as the identifier for retweet deduplication
    pub id: String,
    /// The tweet text
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Tweet>,
}

/// Builds a search query from include and exclude word lists.
///
/// Include words are joined with `" OR "`; each exclude word is appended with
/// a leading `-`, space separated. The result is a best-effort boolean query
/// string for the recent-search endpoint, not a full query grammar.
///
/// # Example
///
/// ```rust
/// use feedbot::build_search_query;
///
/// let query = build_search_query(
///     &["#rustlang".to_string(), "#rust".to_string()],
///     &["spam".to_string()],
/// );
/// assert_eq!(query, "#rustlang OR #rust -spam");
/// ```
pub fn build_search_query(include_words: &[String], exclude_words: &[String]) -> String {
    let mut query = include_words.join(" OR ");
    for word in exclude_words {
        query.push_str(" -");
        query.push_str(word);
    }
    query
}

/// Parses the JSON body of a recent-search response into tweets.
///
/// A response without a `data` field (which the API sends for zero matches)
/// parses as an empty list.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<Tweet>, ProviderError> {
    let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
        ProviderError::new(
            ProviderErrorKind::Unknown,
            format!("Failed to parse search response: {}", e),
        )
    })?;
    Ok(response.data)
}

/// Searches recent tweets matching `query`, returning up to `count` results.
///
/// This function uses the Twitter API v2 recent-search endpoint with OAuth 2.0
/// User Context authentication. Results come back in the order the API
/// returns them.
///
/// # Parameters
///
/// - `config`: Twitter API credentials and base URL
/// - `client`: the shared HTTP client for this run
/// - `query`: the search query, typically from [`build_search_query`]
/// - `count`: maximum number of results to request
///
/// # Returns
///
/// - `Ok(Vec<Tweet>)`: the matching tweets (possibly empty)
/// - `Err(ProviderError)`: if the request fails or the response cannot be
///   parsed; callers treat this as fatal for the run
pub async fn search_tweets(
    config: &TwitterConfig,
    client: &Client,
    query: &str,
    count: u32,
) -> Result<Vec<Tweet>, ProviderError> {
    info!("Searching recent tweets for query: '{}'", query);

    let url = format!(
        "{}/2/tweets/search/recent?query={}&max_results={}",
        config.api_base_url,
        urlencoding::encode(query),
        count
    );
    debug!("Search URL: {}", url);
    debug!("Request headers: Authorization: Bearer [REDACTED]");

    let request_builder = client
        .get(&url)
        .header("Authorization", config.auth_header());

    let response_text = execute_request(request_builder, "search_tweets").await?;
    debug!("Search response: {} bytes received", response_text.len());

    let tweets = parse_search_response(&response_text)?;
    info!("Search returned {} tweets", tweets.len());
    Ok(tweets)
}
