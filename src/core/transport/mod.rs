//! Transport layer for the MCP server.
//!
//! Transports are feature-gated:
//! - `stdio` (default): standard input/output, the usual MCP client setup
//! - `tcp`: line-delimited JSON-RPC over raw TCP sockets
//! - `http`: JSON-RPC over HTTP POST, plus a landing page and health check
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
