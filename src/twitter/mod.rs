//! Twitter/X API integration module.
//!
//! This module contains the functions for interacting with the Twitter/X API
//! v2: posting tweets, searching recent tweets, and retweeting, all using
//! OAuth 2.0 User Context authentication.

mod api;
mod search;
mod tweets;

// Re-export public API
pub use api::{ProviderError, ProviderErrorKind};
pub use search::{build_search_query, search_tweets, Tweet};
pub use tweets::{post_tweet, retweet};

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use api::{classify_status, sanitize_for_logging};
#[allow(unused_imports)]
pub(crate) use search::parse_search_response;
