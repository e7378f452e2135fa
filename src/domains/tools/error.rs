//! Tool-specific error types.

use std::time::Duration;

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::dining::DiningError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The caller's arguments failed validation. Raised before any
    /// upstream request is made.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The dining site could not be scraped.
    #[error(transparent)]
    Dining(#[from] DiningError),

    /// The tool exceeded the hosting time limit.
    #[error("Tool execution timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Whether the error is the caller's fault rather than an execution
    /// failure. Caller faults become protocol errors; execution failures
    /// become `isError` tool results.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidArguments(_))
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}
