//! Pull-based stream

use crate::engine::{CancellationToken, IssueFetcher};
use crate::error::{Error, Result};
use crate::model::Issue;
use futures::{Stream, StreamExt};
use std::collections::VecDeque;
use std::pin::Pin;

/// Stream of issues, or the error that ended the fetch
pub type IssueStream = Pin<Box<dyn Stream<Item = Result<Issue>> + Send>>;

struct PullState {
    fetcher: IssueFetcher,
    cancel: CancellationToken,
    buffer: VecDeque<Issue>,
    more_pages: bool,
    failure: Option<Error>,
}

/// Stream issues from `fetcher`, one page requested at a time
///
/// A page is requested only once the caller has consumed the previous one.
/// The stream ends after the last page's issues. A failure is yielded as the
/// next item once the issues already received are drained, and ends the
/// stream. Cancellation is checked every time the caller asks for another
/// issue and fails that request.
pub fn issue_stream(fetcher: IssueFetcher, cancel: CancellationToken) -> IssueStream {
    let state = PullState {
        fetcher,
        cancel,
        buffer: VecDeque::new(),
        more_pages: true,
        failure: None,
    };

    futures::stream::try_unfold(state, pull_next).boxed()
}

async fn pull_next(mut state: PullState) -> Result<Option<(Issue, PullState)>> {
    loop {
        if state.buffer.is_empty() {
            if let Some(e) = state.failure.take() {
                return Err(e);
            }
            if !state.more_pages {
                return Ok(None);
            }
        }
        state.cancel.check()?;

        if let Some(issue) = state.buffer.pop_front() {
            return Ok(Some((issue, state)));
        }

        let page = state.fetcher.fetch_page(&state.cancel).await?;
        let next = state.fetcher.advance(&page, &state.cancel);
        state.buffer.extend(page.issues);

        // The page's issues are still yielded before a failed advance surfaces.
        match next {
            Ok(next) => state.more_pages = next.is_continue(),
            Err(e) => {
                state.more_pages = false;
                state.failure = Some(e);
            }
        }
    }
}
