//! Stanford Dining MCP Server Library
//!
//! A Model Context Protocol server that answers questions about Stanford
//! dining hall menus by scraping the university's ASP.NET Web Forms menu page.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **dining**: session acquisition, postback replay, menu parsing, and markdown formatting
//!   - **tools**: the `get_dining_options` and `get_dining_menu` MCP tools
//!
//! # Example
//!
//! ```rust,no_run
//! use stanford_dining_mcp::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
