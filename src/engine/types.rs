//! Engine types
//!
//! Configuration, statistics and outcomes for a fetch.

use std::time::Duration;

/// Delay before every page request
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(200);

/// Cap on the number of issues collected by a bulk fetch
pub const DEFAULT_MAX_ITEMS: usize = 200;

/// Configuration for a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Wait before each page request
    pub page_delay: Duration,
    /// Bulk fetch stops once this many issues are collected
    pub max_items: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_delay: DEFAULT_PAGE_DELAY,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl FetchConfig {
    /// Create a new fetch config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page delay
    #[must_use]
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Set the bulk cap
    #[must_use]
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }
}

/// Statistics from a fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Pages fetched
    pub pages_fetched: u32,
    /// Issues received across all pages
    pub records_fetched: usize,
}

/// How a page loop ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The API reported no more pages
    Exhausted,
    /// The page consumer asked to stop
    Stopped,
}
