// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # issue-feed
//!
//! Paginated retrieval of GitHub issues through the GraphQL API, delivered
//! under four consumption models.
//!
//! ## Features
//!
//! - **Cursor pagination**: walks a repository's issues backwards, 25 per page
//! - **Fixed pacing**: waits 200ms before every page request
//! - **Four delivery models**: bulk with progress, lazy units, push, pull stream
//! - **Cooperative cancellation**: one token observed at the page delay and between pages
//! - **Label classification**: language feature, subsystem, or resolution
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use issue_feed::{CancellationToken, EnvToken, HttpTransport, IssueFeed, Repository, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let feed = IssueFeed::new(Arc::new(HttpTransport::new()?), Arc::new(EnvToken::default()));
//!     let repo = Repository::new("dotnet", "roslyn");
//!
//!     let issues = feed.fetch_all(&repo, None, &CancellationToken::new()).await?;
//!     for issue in issues {
//!         println!("{} [{}]", issue.title, issue.category());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                          IssueFeed                             │
//! │   fetch_all()      units()      subscribe()      stream()      │
//! └────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴──────────────────────────────────┐
//! │                   IssueFetcher (page loop)                     │
//! │  delay → request → transport → parse → deliver → next cursor   │
//! └────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬───────────┬─────┴──────┬────────────┬─────────────┐
//! │   Auth    │   HTTP    │  GraphQL   │ Pagination │    Model    │
//! ├───────────┼───────────┼────────────┼────────────┼─────────────┤
//! │ Static    │ POST      │ Query      │ Cursor     │ Issue       │
//! │ Env var   │ Quota     │ Page parse │ Counters   │ Categorize  │
//! └───────────┴───────────┴────────────┴────────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document enum variants and error fields

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Issue model and label classification
pub mod model;

/// Token providers
pub mod auth;

/// HTTP transport with optional request quota
pub mod http;

/// Issues query and page parsing
pub mod graphql;

/// Cursor tracking
pub mod pagination;

/// Page loop and cancellation
pub mod engine;

/// Delivery adapters
pub mod delivery;

/// Feed entry point
pub mod feed;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::{EnvToken, StaticToken, TokenProvider};
pub use config::FeedConfig;
pub use delivery::{IssueStream, IssueSubscription, IssueUnits, ProgressCallback, PushEvent};
pub use engine::{CancellationToken, FetchConfig, FetchStats, IssueFetcher};
pub use feed::IssueFeed;
pub use http::{HttpTransport, HttpTransportConfig, Transport};
pub use model::{categorize, Author, Issue, IssueState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
