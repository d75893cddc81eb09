//! Issues query request

use crate::error::Result;
use crate::types::{Cursor, Repository};
use serde::Serialize;

/// Issues requested per page
pub const PAGE_SIZE: u32 = 25;

/// Labels requested per issue
pub const LABELS_PER_ISSUE: u32 = 5;

/// Query text for one page of issues, newest page first
pub const ISSUES_QUERY: &str = r"query ($owner_name: String!, $repo_name: String!, $start_cursor: String) {
  repository(owner: $owner_name, name: $repo_name) {
    issues(last: 25, before: $start_cursor) {
      pageInfo {
        hasPreviousPage
        startCursor
      }
      nodes {
        title
        url
        number
        createdAt
        state
        author {
          login
          url
        }
        labels(first: 5) {
          nodes {
            name
            description
          }
        }
      }
    }
  }
}";

/// Query variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuesVariables {
    pub owner_name: String,
    pub repo_name: String,
    /// Absent on the first page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<Cursor>,
}

/// Request body for one page of issues
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuesRequest {
    pub query: &'static str,
    pub variables: IssuesVariables,
}

impl IssuesRequest {
    /// Build the request for `repository`, starting before `cursor`
    pub fn new(repository: &Repository, cursor: Option<&str>) -> Self {
        Self {
            query: ISSUES_QUERY,
            variables: IssuesVariables {
                owner_name: repository.owner.clone(),
                repo_name: repository.name.clone(),
                start_cursor: cursor.map(ToString::to_string),
            },
        }
    }

    /// Serialize to the JSON body sent over the wire
    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
