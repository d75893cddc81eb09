//! GraphQL module
//!
//! Builds the issues query for one page and parses the response body into
//! a [`Page`].
//!
//! # Overview
//!
//! The query walks issues backwards (`last: 25, before: $start_cursor`), so
//! `pageInfo.hasPreviousPage` says whether another page follows and
//! `pageInfo.startCursor` is the cursor for that page.

mod request;
mod response;

pub use request::{IssuesRequest, IssuesVariables, ISSUES_QUERY, LABELS_PER_ISSUE, PAGE_SIZE};
pub use response::{parse_page, Page};
