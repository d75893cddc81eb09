//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch GitHub issues page by page
#[derive(Parser, Debug)]
#[command(name = "issue-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the issues of a repository
    Fetch {
        /// Repository owner
        owner: String,

        /// Repository name
        repo: String,

        /// Delivery model used to fetch
        #[arg(short, long, default_value = "bulk")]
        mode: DeliveryMode,

        /// Maximum issues to print (also caps a bulk fetch)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Delay before each page request in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// GraphQL endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Environment variable holding the API token
        #[arg(long)]
        token_env: Option<String>,
    },

    /// Print the category of a label set
    Categorize {
        /// Label names in issue order
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

/// How issues are handed to the printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DeliveryMode {
    /// Collect everything, then print
    Bulk,
    /// Resolve one issue at a time
    Units,
    /// Receive issues from a background task
    Push,
    /// Pull issues from a stream
    Pull,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one issue per line)
    Json,
    /// Human-readable output
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::parse_from([
            "issue-feed",
            "fetch",
            "dotnet",
            "roslyn",
            "--mode",
            "pull",
            "--limit",
            "10",
            "-f",
            "json",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Fetch {
                owner,
                repo,
                mode,
                limit,
                ..
            } => {
                assert_eq!(owner, "dotnet");
                assert_eq!(repo, "roslyn");
                assert_eq!(mode, DeliveryMode::Pull);
                assert_eq!(limit, Some(10));
            }
            Commands::Categorize { .. } => panic!("Expected fetch command"),
        }
    }

    #[test]
    fn test_parse_categorize() {
        let cli = Cli::parse_from(["issue-feed", "categorize", "Area-Compilers", "Bug"]);
        match cli.command {
            Commands::Categorize { labels } => assert_eq!(labels, vec!["Area-Compilers", "Bug"]),
            Commands::Fetch { .. } => panic!("Expected categorize command"),
        }
    }

    #[test]
    fn test_verbose_overrides_log_level() {
        let cli = Cli::parse_from(["issue-feed", "-v", "categorize", "x"]);
        assert_eq!(cli.log_level(), LogLevel::Debug);

        let cli = Cli::parse_from(["issue-feed", "--log-level", "warn", "categorize", "x"]);
        assert_eq!(cli.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_categorize_requires_labels() {
        assert!(Cli::try_parse_from(["issue-feed", "categorize"]).is_err());
    }
}
