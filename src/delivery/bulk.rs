//! Bulk fetch with progress

use crate::engine::{CancellationToken, IssueFetcher};
use crate::error::Result;
use crate::model::Issue;
use std::ops::ControlFlow;
use tracing::debug;

/// Receives the cumulative number of issues collected after each page
pub type ProgressCallback = Box<dyn Fn(usize) + Send + Sync>;

/// Report progress if a callback is set
pub fn emit(on_progress: Option<&ProgressCallback>, count: usize) {
    if let Some(cb) = on_progress {
        cb(count);
    }
}

/// Collect every issue into one vector
///
/// Stops early once `max_items` issues are collected (0 = unlimited); the
/// result is truncated to the cap. Any error fails the whole call and the
/// issues collected so far are dropped.
pub async fn fetch_all(
    fetcher: &mut IssueFetcher,
    on_progress: Option<&ProgressCallback>,
    cancel: &CancellationToken,
) -> Result<Vec<Issue>> {
    let cap = fetcher.config().max_items;
    let mut issues = Vec::new();

    fetcher
        .run(cancel, |page| {
            issues.extend(page.issues);
            if cap > 0 && issues.len() >= cap {
                issues.truncate(cap);
                emit(on_progress, issues.len());
                debug!("Reached bulk cap of {cap} issues");
                return ControlFlow::Break(());
            }
            emit(on_progress, issues.len());
            ControlFlow::Continue(())
        })
        .await?;

    Ok(issues)
}
