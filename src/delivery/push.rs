//! Push-based delivery

use crate::engine::{CancellationToken, FetchOutcome, IssueFetcher};
use crate::error::Error;
use crate::model::Issue;
use futures::Stream;
use std::ops::ControlFlow;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Signals emitted by a subscription
#[derive(Debug)]
pub enum PushEvent {
    /// The next issue in order
    Next(Issue),
    /// The fetch finished normally; nothing follows
    Completed,
    /// The fetch failed; nothing follows
    Error(Error),
}

impl PushEvent {
    /// Check if this event ends the subscription
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Next(_))
    }
}

/// Handle to a running push fetch
///
/// The fetch runs under a child of the caller's token. Dropping the handle
/// or calling [`cancel`](Self::cancel) stops this fetch only; the caller's
/// token is left untouched.
pub struct IssueSubscription {
    events: mpsc::UnboundedReceiver<PushEvent>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Start pushing issues from `fetcher` on a background task
///
/// Issues arrive as `Next` events, followed by exactly one `Completed` or
/// `Error`. If `cancel` fires first the task stops at its next cancellation
/// point and the event channel simply closes with no terminal event.
/// Must be called from within a tokio runtime.
pub fn subscribe(fetcher: IssueFetcher, cancel: CancellationToken) -> IssueSubscription {
    let cancel = cancel.child_token();
    let (tx, events) = mpsc::unbounded_channel();
    let handle = tokio::spawn(drive(fetcher, tx, cancel.clone()));

    IssueSubscription {
        events,
        cancel,
        handle,
    }
}

async fn drive(
    mut fetcher: IssueFetcher,
    tx: mpsc::UnboundedSender<PushEvent>,
    cancel: CancellationToken,
) {
    let result = fetcher
        .run(&cancel, |page| {
            for issue in page.issues {
                if tx.send(PushEvent::Next(issue)).is_err() {
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        })
        .await;

    match result {
        Ok(FetchOutcome::Exhausted) => {
            let _ = tx.send(PushEvent::Completed);
        }
        Ok(FetchOutcome::Stopped) => {
            debug!("Subscriber went away, push fetch stopped");
        }
        Err(e) if e.is_cancelled() => {
            debug!("Push fetch cancelled");
        }
        Err(e) => {
            warn!("Push fetch failed: {e}");
            let _ = tx.send(PushEvent::Error(e));
        }
    }
}

impl IssueSubscription {
    /// Wait for the next event; `None` once the channel is closed
    pub async fn recv(&mut self) -> Option<PushEvent> {
        self.events.recv().await
    }

    /// Stop this fetch at its next cancellation point
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check if this fetch was cancelled, directly or through the caller's token
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Check if the background task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Stream for IssueSubscription {
    type Item = PushEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<PushEvent>> {
        self.events.poll_recv(cx)
    }
}

impl Drop for IssueSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for IssueSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueSubscription")
            .field("cancelled", &self.cancel.is_cancelled())
            .field("finished", &self.handle.is_finished())
            .finish_non_exhaustive()
    }
}
