//! CLI module
//!
//! Command-line interface for fetching issues.
//!
//! # Commands
//!
//! - `fetch` - Fetch the issues of a repository under a chosen delivery model
//! - `categorize` - Print the category of a label set

mod commands;
mod runner;

pub use commands::{Cli, Commands, DeliveryMode, OutputFormat};
pub use runner::Runner;
