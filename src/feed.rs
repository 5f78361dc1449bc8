//! Feed retrieval, parsing, and tweet message composition.
//!
//! Feeds are fetched over HTTP and parsed with `feed-rs`, which handles both
//! RSS and Atom documents. Entries come back in document order, which is not
//! guaranteed to be chronological.

use feed_rs::parser;
use log::{debug, info, warn};
use reqwest::Client;
use std::io::Cursor;

/// A single entry from a syndication feed.
///
/// Produced by [`parse_feed`]; immutable and scoped to one poll cycle. The
/// link doubles as the entry's unique identifier for duplicate suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Entry title, empty if the feed omits one
    pub title: String,
    /// Entry link, unique per entry
    pub link: String,
    /// Entry summary/description, empty if the feed omits one
    pub description: String,
}

/// Fetches the feed at `url` and parses it into a list of entries.
///
/// # Parameters
///
/// - `client`: the shared HTTP client for this run
/// - `url`: the feed URL to fetch
///
/// # Returns
///
/// - `Ok(Vec<FeedEntry>)`: the parsed entries in document order (possibly empty)
/// - `Err(Box<dyn std::error::Error + Send + Sync>)`: if the request fails,
///   the server responds with a non-success status, or the body is not a
///   parseable feed
pub async fn fetch_feed(
    client: &Client,
    url: &str,
) -> Result<Vec<FeedEntry>, Box<dyn std::error::Error + Send + Sync>> {
    info!("Loading feed from {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Feed request to {} failed with status {}", url, status).into());
    }

    let body = response.text().await?;
    debug!("Received {} bytes of feed data from {}", body.len(), url);

    parse_feed(&body)
}

/// Parses a feed document into entries.
///
/// Entries without a link cannot be posted or deduplicated, so they are
/// skipped with a warning. Missing titles and descriptions become empty
/// strings.
pub fn parse_feed(body: &str) -> Result<Vec<FeedEntry>, Box<dyn std::error::Error + Send + Sync>> {
    let feed = parser::parse(Cursor::new(body))?;
    debug!("Parsed feed with {} entries", feed.entries.len());

    let mut entries = Vec::with_capacity(feed.entries.len());
    for entry in feed.entries {
        let link = match entry.links.first() {
            Some(link) => link.href.clone(),
            None => {
                warn!("Feed entry missing link, skipping");
                continue;
            }
        };
        entries.push(FeedEntry {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link,
            description: entry.summary.map(|s| s.content).unwrap_or_default(),
        });
    }

    Ok(entries)
}

/// Truncates `text` and appends three dots at the end if its character count
/// exceeds `max_length`.
///
/// Counts characters rather than bytes so multi-byte titles are never split
/// mid-character. Text at or under the limit is returned unchanged; longer
/// text becomes exactly the first `max_length` characters followed by `...`.
pub fn shorten_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_length).collect();
        format!("{}...", truncated)
    }
}

/// Composes a tweet message from a feed entry: the title shortened to
/// `max_title_length` characters, a space, and the entry link.
pub fn compose_message(entry: &FeedEntry, max_title_length: usize) -> String {
    format!(
        "{} {}",
        shorten_text(&entry.title, max_title_length),
        entry.link
    )
}
