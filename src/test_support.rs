//! Fixtures shared by unit tests

use crate::error::{Error, Result};
use crate::graphql::{parse_page, Page};
use crate::http::Transport;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Issue node with title `Issue {n}`
pub(crate) fn issue_node(n: usize) -> Value {
    json!({
        "title": format!("Issue {n}"),
        "url": format!("https://github.com/dotnet/roslyn/issues/{n}"),
        "number": n,
        "createdAt": "2020-03-04T05:06:07Z",
        "state": if n % 2 == 0 { "OPEN" } else { "CLOSED" },
        "author": {"login": format!("user{n}"), "url": format!("https://github.com/user{n}")},
        "labels": {"nodes": [{"name": format!("Area-{n}"), "description": null}]}
    })
}

/// Response body holding issues `numbers`
pub(crate) fn page_body(
    numbers: impl IntoIterator<Item = usize>,
    has_previous: bool,
    cursor: Option<&str>,
) -> String {
    let nodes: Vec<Value> = numbers.into_iter().map(issue_node).collect();
    json!({
        "data": {
            "repository": {
                "issues": {
                    "pageInfo": {"hasPreviousPage": has_previous, "startCursor": cursor},
                    "nodes": nodes
                }
            }
        }
    })
    .to_string()
}

/// Parsed page holding issues `numbers`
pub(crate) fn page(
    numbers: impl IntoIterator<Item = usize>,
    has_previous: bool,
    cursor: Option<&str>,
) -> Page {
    parse_page(&page_body(numbers, has_previous, cursor)).unwrap()
}

/// Titles in delivery order
pub(crate) fn titles(issues: &[crate::model::Issue]) -> Vec<String> {
    issues.iter().map(|i| i.title.clone()).collect()
}

enum Reply {
    Body(String),
    Fail(String),
}

/// Transport answering from a script, recording every request
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body
    pub(crate) fn reply(self, body: String) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Body(body));
        self
    }

    /// Queue a transport failure
    pub(crate) fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Fail(message.to_string()));
        self
    }

    /// The standard two-page script: issues 1-2 then issue 3
    pub(crate) fn two_pages() -> Self {
        Self::new()
            .reply(page_body([1, 2], true, Some("c1")))
            .reply(page_body([3], false, Some("c2")))
    }

    /// Number of requests sent so far
    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// `start_cursor` variable of every request, in order
    pub(crate) fn cursors(&self) -> Vec<Option<String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r["variables"]["start_cursor"].as_str().map(String::from))
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, body: String, token: &str) -> Result<String> {
        assert_eq!(token, "test-token");
        let request: Value = serde_json::from_str(&body)?;
        self.requests.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(message)) => Err(Error::transport(message)),
            None => Err(Error::transport("script exhausted")),
        }
    }
}
