//! Issue model types

use super::classify::categorize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Lifecycle state of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueState {
    /// State string the API sent was not recognized
    #[default]
    Unknown,
    Open,
    Closed,
}

impl IssueState {
    /// Map the API's state string. Unrecognized values become `Unknown`.
    pub fn from_wire(state: &str) -> Self {
        match state {
            "OPEN" => Self::Open,
            "CLOSED" => Self::Closed,
            _ => Self::Unknown,
        }
    }
}

/// Issue author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Login name
    pub login: String,
    /// Profile URL
    pub url: Url,
}

/// A single issue as returned by one page of the issues query
///
/// Labels keep the order the API returned them in; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub url: Url,
    pub author: Author,
    pub state: IssueState,
    pub created_at: DateTime<Utc>,
    pub labels: Vec<String>,
}

impl Issue {
    /// Category derived from the issue labels
    pub fn category(&self) -> String {
        categorize(&self.labels)
    }

    /// Check if the issue is open
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }
}
