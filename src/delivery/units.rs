//! Lazily resolved fetch units

use crate::engine::{CancellationToken, IssueFetcher};
use crate::error::Result;
use crate::model::Issue;
use std::collections::VecDeque;
use tracing::debug;

/// Issues handed out one unit at a time
///
/// Each call to [`next_unit`](Self::next_unit) resolves one issue from the
/// buffered page, refilling the buffer with one page request when it runs
/// dry. The sequence ends with `None` once a refill comes back empty; the
/// `hasMore` flag is not consulted.
pub struct IssueUnits {
    fetcher: IssueFetcher,
    cancel: CancellationToken,
    buffer: VecDeque<Issue>,
    finished: bool,
}

impl IssueUnits {
    /// Create units over a fresh fetcher
    pub fn new(fetcher: IssueFetcher, cancel: CancellationToken) -> Self {
        Self {
            fetcher,
            cancel,
            buffer: VecDeque::new(),
            finished: false,
        }
    }

    /// Resolve the next unit
    ///
    /// Fails with `Cancelled` once cancellation was requested, even when
    /// issues are still buffered. After the sequence ends or a failure, every
    /// later unit resolves to `None` without another request.
    pub async fn next_unit(&mut self) -> Result<Option<Issue>> {
        self.cancel.check()?;

        if self.buffer.is_empty() && !self.finished {
            if let Err(e) = self.refill().await {
                self.finished = true;
                return Err(e);
            }
        }

        self.cancel.check()?;
        Ok(self.buffer.pop_front())
    }

    async fn refill(&mut self) -> Result<()> {
        let page = self.fetcher.fetch_page(&self.cancel).await?;

        if page.is_empty() {
            debug!(
                "Empty refill for {}, units exhausted",
                self.fetcher.state().repository()
            );
            self.finished = true;
            self.fetcher.state_mut().mark_done();
            return Ok(());
        }

        // Without a cursor there is nothing to request after this page.
        if page.next_cursor.is_none() {
            self.finished = true;
        }

        self.fetcher.state_mut().follow(&page);
        self.buffer.extend(page.issues);
        Ok(())
    }

    /// Issues buffered from the current page
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Underlying fetcher
    pub fn fetcher(&self) -> &IssueFetcher {
        &self.fetcher
    }
}

impl std::fmt::Debug for IssueUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueUnits")
            .field("fetcher", &self.fetcher)
            .field("buffered", &self.buffer.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
