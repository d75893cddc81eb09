//! Delivery module
//!
//! Four ways of handing the fetched issues to a caller. All of them drive
//! the same [`IssueFetcher`](crate::engine::IssueFetcher) loop and deliver
//! issues in page order, then node order.
//!
//! | Adapter | Pacing | Failure surfaces |
//! |---|---|---|
//! | [`fetch_all`] | caller waits for the whole fetch | as the call's error; partial results are dropped |
//! | [`IssueUnits`] | caller resolves one unit at a time | on the next unit requested |
//! | [`subscribe`] | pages are pushed as fast as they arrive | as a terminal `PushEvent::Error` |
//! | [`issue_stream`] | caller polls the stream | as the next item |
//!
//! `IssueUnits` stops on an empty refill rather than on `hasMore`, so it
//! always makes one more request than the other adapters once the last page
//! had issues.

mod bulk;
mod pull;
mod push;
mod units;

pub use bulk::{emit, fetch_all, ProgressCallback};
pub use pull::{issue_stream, IssueStream};
pub use push::{subscribe, IssueSubscription, PushEvent};
pub use units::IssueUnits;
