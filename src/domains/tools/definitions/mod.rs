//! Tool definitions module.
//!
//! One file per tool, plus the argument/result plumbing they share.

pub mod common;
pub mod menu;
pub mod options;

pub use common::ToolContext;
pub use menu::{DiningMenuParams, DiningMenuTool};
pub use options::{DiningOptionsParams, DiningOptionsTool};
