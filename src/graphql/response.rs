//! Issues query response parsing

use crate::error::{Error, Result};
use crate::model::{Author, Issue, IssueState};
use crate::types::Cursor;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

/// One page of issues plus continuation info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Issues in node order
    pub issues: Vec<Issue>,
    /// Another page follows (`hasPreviousPage`)
    pub has_more: bool,
    /// Cursor for the following page (`startCursor`), absent on an empty page
    pub next_cursor: Option<Cursor>,
}

impl Page {
    /// Number of issues on this page
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the page holds no issues
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parse a raw response body into a page
///
/// Fails with `MalformedResponse` when the body is not JSON, when the
/// GraphQL layer reported errors instead of data, or when a node lacks a
/// required field. Unknown issue states are kept as `Unknown`.
pub fn parse_page(body: &str) -> Result<Page> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| Error::malformed(format!("Failed to parse issues response: {e}")))?;

    let Some(repository) = response.data.and_then(|data| data.repository) else {
        let reason = response
            .errors
            .first()
            .map_or("missing data.repository", |e| e.message.as_str());
        return Err(Error::malformed(reason));
    };

    let issues = repository.issues;
    Ok(Page {
        issues: issues.nodes.into_iter().map(Issue::from).collect(),
        has_more: issues.page_info.has_previous_page,
        next_cursor: issues.page_info.start_cursor,
    })
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<IssuesData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct IssuesData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueConnection {
    page_info: PageInfo,
    nodes: Vec<IssueNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_previous_page: bool,
    start_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueNode {
    title: String,
    url: Url,
    created_at: DateTime<Utc>,
    state: String,
    author: AuthorNode,
    labels: LabelConnection,
}

#[derive(Debug, Deserialize)]
struct AuthorNode {
    login: String,
    url: Url,
}

#[derive(Debug, Deserialize)]
struct LabelConnection {
    nodes: Vec<LabelNode>,
}

#[derive(Debug, Deserialize)]
struct LabelNode {
    name: String,
}

impl From<IssueNode> for Issue {
    fn from(node: IssueNode) -> Self {
        Self {
            title: node.title,
            url: node.url,
            author: Author {
                login: node.author.login,
                url: node.author.url,
            },
            state: IssueState::from_wire(&node.state),
            created_at: node.created_at,
            labels: node.labels.nodes.into_iter().map(|l| l.name).collect(),
        }
    }
}
