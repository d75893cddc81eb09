//! Pagination module
//!
//! Tracks the cursor of one in-flight fetch and decides whether another page
//! follows.
//!
//! # Overview
//!
//! A `PaginationState` belongs to exactly one fetch. It starts without a
//! cursor, is advanced after every page, and is dropped when the fetch ends;
//! a new fetch always starts from a fresh state.

mod types;

pub use types::{NextPage, PaginationState};
