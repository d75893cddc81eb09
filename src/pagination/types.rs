//! Pagination types

use crate::error::{Error, Result};
use crate::graphql::{IssuesRequest, Page};
use crate::types::{Cursor, Repository};

/// Result of advancing past a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Another page follows, requested with this cursor
    Continue {
        /// Cursor for the following request
        cursor: Cursor,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Request state of one fetch
#[derive(Debug, Clone)]
pub struct PaginationState {
    repository: Repository,
    cursor: Option<Cursor>,
    pages_fetched: u32,
    records_fetched: usize,
    done: bool,
}

impl PaginationState {
    /// Create a fresh state with no cursor
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            cursor: None,
            pages_fetched: 0,
            records_fetched: 0,
            done: false,
        }
    }

    /// Request for the current position
    pub fn request(&self) -> IssuesRequest {
        IssuesRequest::new(&self.repository, self.cursor.as_deref())
    }

    /// Advance past `page`, continuing only while the API reports more pages
    pub fn next_page(&mut self, page: &Page) -> Result<NextPage> {
        self.record(page);

        if !page.has_more {
            self.done = true;
            return Ok(NextPage::Done);
        }

        let cursor = page.next_cursor.clone().ok_or_else(|| {
            Error::malformed("hasPreviousPage is true but startCursor is missing")
        })?;
        self.cursor = Some(cursor.clone());
        Ok(NextPage::Continue { cursor })
    }

    /// Move to `cursor` regardless of whether more pages were reported
    pub fn follow(&mut self, page: &Page) {
        self.record(page);
        self.cursor.clone_from(&page.next_cursor);
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    fn record(&mut self, page: &Page) {
        self.pages_fetched += 1;
        self.records_fetched += page.len();
    }

    /// Repository being fetched
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Cursor the next request will use
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Records fetched so far
    pub fn records_fetched(&self) -> usize {
        self.records_fetched
    }

    /// Is pagination complete?
    pub fn is_done(&self) -> bool {
        self.done
    }
}
