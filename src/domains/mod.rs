//! Domains module containing business logic organized by bounded contexts.
//!
//! - **dining**: scraping the dining menu site
//! - **tools**: the MCP tools built on top of it

pub mod dining;
pub mod tools;
