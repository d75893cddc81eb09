//! Execution engine module
//!
//! The paginated fetch loop shared by every delivery adapter.
//!
//! # Overview
//!
//! One iteration of the loop:
//!
//! 1. wait the page delay (a cancellation point)
//! 2. build the request from the current cursor
//! 3. send it through the transport
//! 4. parse the response into a page
//! 5. hand the page to the consumer
//! 6. stop if the API reports no more pages
//! 7. otherwise advance the cursor, check cancellation, and loop
//!
//! Failures are never retried. Pages are requested strictly one after the
//! other; nothing is fetched ahead of the consumer.

mod cancel;
mod types;

pub use cancel::CancellationToken;
pub use types::{FetchConfig, FetchOutcome, FetchStats, DEFAULT_MAX_ITEMS, DEFAULT_PAGE_DELAY};

use crate::auth::TokenProvider;
use crate::error::Result;
use crate::graphql::{parse_page, Page};
use crate::http::Transport;
use crate::pagination::{NextPage, PaginationState};
use crate::types::Repository;
use std::ops::ControlFlow;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Drives the page loop for one repository
///
/// A fetcher owns its pagination state. Create a new one for every fetch.
pub struct IssueFetcher {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenProvider>,
    config: FetchConfig,
    state: PaginationState,
}

impl IssueFetcher {
    /// Create a fetcher positioned before the first page
    pub fn new(
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenProvider>,
        repository: Repository,
        config: FetchConfig,
    ) -> Self {
        Self {
            transport,
            tokens,
            config,
            state: PaginationState::new(repository),
        }
    }

    /// Fetch configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Mutable pagination state
    pub fn state_mut(&mut self) -> &mut PaginationState {
        &mut self.state
    }

    /// Get statistics
    pub fn stats(&self) -> FetchStats {
        FetchStats {
            pages_fetched: self.state.pages_fetched(),
            records_fetched: self.state.records_fetched(),
        }
    }

    /// Fetch the page at the current cursor without advancing
    ///
    /// Waits the page delay first; cancellation during the wait fails with
    /// `Cancelled`.
    pub async fn fetch_page(&self, cancel: &CancellationToken) -> Result<Page> {
        cancel.sleep(self.config.page_delay).await?;

        let body = self.state.request().to_body()?;
        let token = self.tokens.token()?;

        debug!(
            "Requesting issues page for {} (cursor: {:?})",
            self.state.repository(),
            self.state.cursor()
        );

        let response = self.transport.send(body, &token).await.map_err(|e| {
            warn!("Page request for {} failed: {e}", self.state.repository());
            e
        })?;
        let page = parse_page(&response)?;

        debug!(
            "Fetched {} issues (has_more: {})",
            page.len(),
            page.has_more
        );
        Ok(page)
    }

    /// Advance past `page` and check cancellation if another page follows
    ///
    /// Used by consumers that drive the loop one page at a time.
    pub fn advance(&mut self, page: &Page, cancel: &CancellationToken) -> Result<NextPage> {
        let next = self.state.next_page(page)?;
        if next.is_continue() {
            cancel.check()?;
        }
        Ok(next)
    }

    /// Run the page loop until the pages run out or `on_page` breaks
    ///
    /// `on_page` sees every page in order before the loop decides whether to
    /// continue, including a page whose continuation turns out malformed.
    pub async fn run<F>(&mut self, cancel: &CancellationToken, mut on_page: F) -> Result<FetchOutcome>
    where
        F: FnMut(Page) -> ControlFlow<()>,
    {
        loop {
            let page = self.fetch_page(cancel).await?;
            // A bad continuation fails the fetch only after the page is handed over.
            let next = self.state.next_page(&page);

            if on_page(page).is_break() {
                debug!("Consumer stopped fetch for {}", self.state.repository());
                self.state.mark_done();
                return Ok(FetchOutcome::Stopped);
            }

            match next? {
                NextPage::Done => {
                    info!(
                        "Completed fetch for {}: {} issues in {} pages",
                        self.state.repository(),
                        self.state.records_fetched(),
                        self.state.pages_fetched()
                    );
                    return Ok(FetchOutcome::Exhausted);
                }
                NextPage::Continue { .. } => cancel.check()?,
            }
        }
    }
}

impl std::fmt::Debug for IssueFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueFetcher")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
