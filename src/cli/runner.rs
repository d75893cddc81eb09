//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, DeliveryMode, OutputFormat};
use crate::config::FeedConfig;
use crate::delivery::{ProgressCallback, PushEvent};
use crate::engine::CancellationToken;
use crate::error::{Error, Result};
use crate::feed::IssueFeed;
use crate::http::HttpTransport;
use crate::model::{categorize, Issue, IssueState};
use crate::types::Repository;
use futures::StreamExt;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Overrides for one fetch taken from the command line
struct FetchArgs<'a> {
    owner: &'a str,
    repo: &'a str,
    mode: DeliveryMode,
    limit: Option<usize>,
    delay_ms: Option<u64>,
    endpoint: Option<&'a str>,
    token_env: Option<&'a str>,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch {
                owner,
                repo,
                mode,
                limit,
                delay_ms,
                endpoint,
                token_env,
            } => {
                let args = FetchArgs {
                    owner,
                    repo,
                    mode: *mode,
                    limit: *limit,
                    delay_ms: *delay_ms,
                    endpoint: endpoint.as_deref(),
                    token_env: token_env.as_deref(),
                };
                self.fetch(&args).await
            }
            Commands::Categorize { labels } => {
                self.categorize(labels);
                Ok(())
            }
        }
    }

    /// Load the config file, if any, and apply command line overrides
    fn load_config(&self, args: &FetchArgs<'_>) -> Result<FeedConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FeedConfig::load(path)?,
            None => FeedConfig::default(),
        };

        if let Some(limit) = args.limit {
            config.max_items = limit;
        }
        if let Some(delay_ms) = args.delay_ms {
            config.page_delay_ms = delay_ms;
        }
        if let Some(endpoint) = args.endpoint {
            config.endpoint = endpoint.to_string();
        }
        if let Some(token_env) = args.token_env {
            config.token_env = token_env.to_string();
        }

        Ok(config)
    }

    async fn fetch(&self, args: &FetchArgs<'_>) -> Result<()> {
        let config = self.load_config(args)?;
        let repository = Repository::new(args.owner, args.repo);

        let transport = HttpTransport::with_config(config.transport_config())?;
        let feed = IssueFeed::new(Arc::new(transport), Arc::new(config.token_provider()))
            .with_config(config.fetch_config());

        let cancel = CancellationToken::new();
        spawn_interrupt_handler(cancel.clone());

        info!("Fetching issues of {repository} ({:?} mode)", args.mode);
        let start = Instant::now();

        let printed = match args.mode {
            DeliveryMode::Bulk => self.fetch_bulk(&feed, &repository, &cancel).await?,
            DeliveryMode::Units => self.fetch_units(&feed, &repository, cancel, args.limit).await?,
            DeliveryMode::Push => self.fetch_push(&feed, &repository, cancel, args.limit).await?,
            DeliveryMode::Pull => self.fetch_pull(&feed, &repository, cancel, args.limit).await?,
        };

        info!(
            "Printed {printed} issues in {:.1}s",
            start.elapsed().as_secs_f64()
        );
        Ok(())
    }

    async fn fetch_bulk(
        &self,
        feed: &IssueFeed,
        repository: &Repository,
        cancel: &CancellationToken,
    ) -> Result<usize> {
        let progress: ProgressCallback = Box::new(|count| info!("Collected {count} issues"));
        let issues = feed.fetch_all(repository, Some(&progress), cancel).await?;

        for issue in &issues {
            self.print_issue(issue);
        }
        Ok(issues.len())
    }

    async fn fetch_units(
        &self,
        feed: &IssueFeed,
        repository: &Repository,
        cancel: CancellationToken,
        limit: Option<usize>,
    ) -> Result<usize> {
        let mut units = feed.units(repository, cancel);
        let mut printed = 0;

        while !reached(printed, limit) {
            match units.next_unit().await? {
                Some(issue) => {
                    self.print_issue(&issue);
                    printed += 1;
                }
                None => break,
            }
        }
        Ok(printed)
    }

    async fn fetch_push(
        &self,
        feed: &IssueFeed,
        repository: &Repository,
        cancel: CancellationToken,
        limit: Option<usize>,
    ) -> Result<usize> {
        let mut subscription = feed.subscribe(repository, cancel);
        let mut printed = 0;

        while let Some(event) = subscription.recv().await {
            match event {
                PushEvent::Next(issue) => {
                    self.print_issue(&issue);
                    printed += 1;
                    if reached(printed, limit) {
                        subscription.cancel();
                        return Ok(printed);
                    }
                }
                PushEvent::Completed => return Ok(printed),
                PushEvent::Error(e) => return Err(e),
            }
        }

        // The channel closes without a terminal event only on cancellation.
        Err(Error::Cancelled)
    }

    async fn fetch_pull(
        &self,
        feed: &IssueFeed,
        repository: &Repository,
        cancel: CancellationToken,
        limit: Option<usize>,
    ) -> Result<usize> {
        let mut stream = feed.stream(repository, cancel);
        let mut printed = 0;

        while !reached(printed, limit) {
            match stream.next().await {
                Some(issue) => {
                    self.print_issue(&issue?);
                    printed += 1;
                }
                None => break,
            }
        }
        Ok(printed)
    }

    fn categorize(&self, labels: &[String]) {
        let category = categorize(labels);
        match self.cli.format {
            OutputFormat::Json => {
                let msg = json!({ "labels": labels, "category": category });
                println!("{}", serde_json::to_string(&msg).unwrap_or_default());
            }
            OutputFormat::Text => println!("{category}"),
        }
    }

    fn print_issue(&self, issue: &Issue) {
        match self.cli.format {
            OutputFormat::Json => {
                let msg = json!({
                    "title": issue.title,
                    "url": issue.url,
                    "author": issue.author.login,
                    "state": issue.state,
                    "created_at": issue.created_at,
                    "labels": issue.labels,
                    "category": issue.category(),
                });
                println!("{}", serde_json::to_string(&msg).unwrap_or_default());
            }
            OutputFormat::Text => {
                let state = match issue.state {
                    IssueState::Open => "open",
                    IssueState::Closed => "closed",
                    IssueState::Unknown => "?",
                };
                let category = issue.category();
                println!(
                    "{}  {:<6}  {:<20}  {}",
                    issue.created_at.format("%Y-%m-%d"),
                    state,
                    if category.is_empty() { "-" } else { category.as_str() },
                    issue.title
                );
            }
        }
    }
}

fn reached(printed: usize, limit: Option<usize>) -> bool {
    limit.is_some_and(|max| max > 0 && printed >= max)
}

/// Cancel `cancel` on the first Ctrl+C; a second one exits immediately
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to install Ctrl+C handler");
            return;
        }
        warn!("Interrupt received, cancelling fetch");
        cancel.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reached() {
        assert!(!reached(5, None));
        assert!(!reached(5, Some(0)));
        assert!(!reached(4, Some(5)));
        assert!(reached(5, Some(5)));
    }
}
