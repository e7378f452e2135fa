//! Errors raised while talking to the dining menu site.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for dining site operations.
pub type DiningResult<T> = Result<T, DiningError>;

/// Errors that can occur while scraping the dining menu site.
#[derive(Debug, Error)]
pub enum DiningError {
    /// The site answered with a non-success HTTP status.
    #[error("Dining site unavailable: {action} returned HTTP {status}")]
    UpstreamUnavailable {
        action: &'static str,
        status: StatusCode,
    },

    /// The request never produced a usable response (connect, TLS, body read).
    #[error("Dining site request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The menu query form could not be encoded.
    #[error("Failed to encode menu query: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl DiningError {
    /// Create an upstream status error.
    pub fn upstream(action: &'static str, status: StatusCode) -> Self {
        Self::UpstreamUnavailable { action, status }
    }

    /// Whether the site itself rejected the request.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_names_action_and_status() {
        let err = DiningError::upstream("GET dining page", StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.is_upstream_unavailable());
        let message = err.to_string();
        assert!(message.contains("GET dining page"));
        assert!(message.contains("503"));
    }
}
