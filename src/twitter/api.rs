//! Core Twitter API utilities.
//!
//! This module contains the low-level request executor shared by all Twitter
//! API operations, plus the closed error type the rest of the bot uses to
//! decide its log-and-continue policy centrally instead of inspecting raw
//! client errors at each call site.

use log::{debug, error, info};
use reqwest::{RequestBuilder, StatusCode};
use std::fmt;

/// Classification of a failed provider interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The request never completed: connection refused, DNS failure, timeout
    NetworkFailure,
    /// The provider rejected the credentials (HTTP 401/403)
    AuthFailure,
    /// The provider is rate limiting this client (HTTP 429)
    RateLimited,
    /// Anything else, including unexpected response statuses
    Unknown,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderErrorKind::NetworkFailure => write!(f, "network failure"),
            ProviderErrorKind::AuthFailure => write!(f, "authentication failure"),
            ProviderErrorKind::RateLimited => write!(f, "rate limited"),
            ProviderErrorKind::Unknown => write!(f, "unknown error"),
        }
    }
}

/// An error returned by the Twitter API adapter.
///
/// Wraps the failure classification together with a human-readable message
/// that has already been sanitized for logging.
#[derive(Debug)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ProviderError {}

impl ProviderError {
    pub(crate) fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        ProviderError {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() || e.is_connect() || e.is_request() {
            ProviderErrorKind::NetworkFailure
        } else {
            ProviderErrorKind::Unknown
        };
        ProviderError::new(kind, e.to_string())
    }
}

/// Maps an unsuccessful HTTP status to an error classification.
pub(crate) fn classify_status(status: StatusCode) -> ProviderErrorKind {
    match status.as_u16() {
        401 | 403 => ProviderErrorKind::AuthFailure,
        429 => ProviderErrorKind::RateLimited,
        _ => ProviderErrorKind::Unknown,
    }
}

/// Sanitizes text for safe logging by truncating and escaping control
/// characters.
///
/// Replaces newlines and other control characters that could manipulate log
/// output, and truncates long bodies to prevent log flooding.
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' => ' ',
            '\r' => ' ',
            '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!("{}... [truncated, {} total bytes]", truncated, text.len())
    } else {
        sanitized
    }
}

/// Executes a prepared request against the Twitter API and returns the
/// response body on success.
///
/// # Parameters
///
/// - `request_builder`: a configured `reqwest::RequestBuilder` ready to send
/// - `operation_name`: human-readable name for the operation (for logging)
///
/// # Returns
///
/// - `Ok(String)`: the API response body on a success status
/// - `Err(ProviderError)`: a classified error for transport failures and
///   non-success statuses
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    operation_name: &str,
) -> Result<String, ProviderError> {
    debug!("Sending request for operation: {}", operation_name);

    let response = request_builder.send().await?;
    let status = response.status();
    debug!(
        "Received response with status {} for operation: {}",
        status, operation_name
    );

    if status.is_success() {
        let response_text = response.text().await?;
        info!("Operation '{}' completed successfully", operation_name);
        debug!(
            "Response summary for '{}': {} bytes received",
            operation_name,
            response_text.len()
        );
        return Ok(response_text);
    }

    let error_text = response.text().await.unwrap_or_default();
    error!(
        "Operation '{}' failed - Status: {}",
        operation_name, status
    );
    Err(ProviderError::new(
        classify_status(status),
        format!(
            "Twitter API error for operation '{}' ({}): {}",
            operation_name,
            status,
            sanitize_for_logging(&error_text, 200)
        ),
    ))
}
