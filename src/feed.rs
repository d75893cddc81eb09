//! Issue feed
//!
//! Entry point holding the shared transport and token provider. Every call
//! starts a fresh fetch with its own cursor state.

use crate::auth::TokenProvider;
use crate::delivery::{self, IssueStream, IssueSubscription, IssueUnits, ProgressCallback};
use crate::engine::{CancellationToken, FetchConfig, IssueFetcher};
use crate::error::Result;
use crate::http::Transport;
use crate::model::Issue;
use crate::types::Repository;
use std::sync::Arc;

/// Fetches issues of a repository under any delivery model
#[derive(Clone)]
pub struct IssueFeed {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenProvider>,
    config: FetchConfig,
}

impl IssueFeed {
    /// Create a feed with the default fetch configuration
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            transport,
            tokens,
            config: FetchConfig::default(),
        }
    }

    /// Set fetch configuration
    #[must_use]
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// A fresh fetcher positioned before the first page
    pub fn fetcher(&self, repository: &Repository) -> IssueFetcher {
        IssueFetcher::new(
            Arc::clone(&self.transport),
            Arc::clone(&self.tokens),
            repository.clone(),
            self.config.clone(),
        )
    }

    /// Collect all issues, up to `max_items`, reporting progress per page
    pub async fn fetch_all(
        &self,
        repository: &Repository,
        on_progress: Option<&ProgressCallback>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Issue>> {
        let mut fetcher = self.fetcher(repository);
        delivery::fetch_all(&mut fetcher, on_progress, cancel).await
    }

    /// Issues resolved one unit at a time
    pub fn units(&self, repository: &Repository, cancel: CancellationToken) -> IssueUnits {
        IssueUnits::new(self.fetcher(repository), cancel)
    }

    /// Push issues from a background task
    pub fn subscribe(
        &self,
        repository: &Repository,
        cancel: CancellationToken,
    ) -> IssueSubscription {
        delivery::subscribe(self.fetcher(repository), cancel)
    }

    /// Pull issues as a stream
    pub fn stream(&self, repository: &Repository, cancel: CancellationToken) -> IssueStream {
        delivery::issue_stream(self.fetcher(repository), cancel)
    }
}

impl std::fmt::Debug for IssueFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueFeed")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
