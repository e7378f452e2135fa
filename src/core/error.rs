//! Error types and handling for the MCP server.
//!
//! Each layer has its own error enum; this module folds them into one type
//! for server startup and other cross-cutting paths.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the dining site client.
    #[error("Dining error: {0}")]
    Dining(#[from] crate::domains::dining::DiningError),

    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error raised by the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
