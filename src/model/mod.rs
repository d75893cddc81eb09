//! Issue model module
//!
//! Typed domain entities produced by the page parser, plus the label
//! classification used to group issues by feature or subsystem.

mod classify;
mod types;

pub use classify::categorize;
pub use types::{Author, Issue, IssueState};

#[cfg(test)]
mod tests;
