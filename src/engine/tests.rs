//! Tests for engine module

use super::*;
use crate::auth::StaticToken;
use crate::test_support::{page_body, ScriptedTransport};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn fetcher(transport: Arc<ScriptedTransport>) -> IssueFetcher {
    IssueFetcher::new(
        transport,
        Arc::new(StaticToken::new("test-token")),
        Repository::new("dotnet", "roslyn"),
        FetchConfig::new().with_page_delay(Duration::ZERO),
    )
}

// ============================================================================
// FetchConfig Tests
// ============================================================================

#[test]
fn test_fetch_config_default() {
    let config = FetchConfig::default();
    assert_eq!(config.page_delay, Duration::from_millis(200));
    assert_eq!(config.max_items, 200);
}

#[test]
fn test_fetch_config_builder() {
    let config = FetchConfig::new()
        .with_page_delay(Duration::from_millis(5))
        .with_max_items(10);
    assert_eq!(config.page_delay, Duration::from_millis(5));
    assert_eq!(config.max_items, 10);
}

// ============================================================================
// IssueFetcher Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_page_does_not_advance() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let fetcher = fetcher(transport.clone());

    let page = fetcher.fetch_page(&CancellationToken::new()).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(fetcher.state().cursor().is_none());
    assert_eq!(fetcher.stats(), FetchStats::default());
    assert_eq!(transport.cursors(), vec![None]);
}

#[tokio::test]
async fn test_advance_moves_cursor() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let mut fetcher = fetcher(transport.clone());
    let cancel = CancellationToken::new();

    let page = fetcher.fetch_page(&cancel).await.unwrap();
    let next = fetcher.advance(&page, &cancel).unwrap();
    assert_eq!(
        next,
        NextPage::Continue {
            cursor: "c1".to_string()
        }
    );

    let page = fetcher.fetch_page(&cancel).await.unwrap();
    assert!(fetcher.advance(&page, &cancel).unwrap().is_done());
    assert_eq!(transport.cursors(), vec![None, Some("c1".to_string())]);
}

#[tokio::test]
async fn test_advance_checks_cancellation_only_when_continuing() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let mut fetcher = fetcher(transport);
    let cancel = CancellationToken::new();

    let first = fetcher.fetch_page(&cancel).await.unwrap();
    cancel.cancel();
    assert!(fetcher.advance(&first, &cancel).unwrap_err().is_cancelled());

    let last = crate::test_support::page([3], false, Some("c2"));
    assert!(fetcher.advance(&last, &cancel).unwrap().is_done());
}

#[tokio::test]
async fn test_run_visits_pages_in_order() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let mut fetcher = fetcher(transport.clone());
    let mut seen = Vec::new();

    let outcome = fetcher
        .run(&CancellationToken::new(), |page| {
            seen.push(page.issues.len());
            ControlFlow::Continue(())
        })
        .await
        .unwrap();

    assert_eq!(outcome, FetchOutcome::Exhausted);
    assert_eq!(seen, vec![2, 1]);
    assert_eq!(transport.request_count(), 2);
    assert_eq!(
        fetcher.stats(),
        FetchStats {
            pages_fetched: 2,
            records_fetched: 3
        }
    );
    assert!(fetcher.state().is_done());
}

#[tokio::test]
async fn test_run_stops_when_consumer_breaks() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let mut fetcher = fetcher(transport.clone());

    let outcome = fetcher
        .run(&CancellationToken::new(), |_| ControlFlow::Break(()))
        .await
        .unwrap();

    assert_eq!(outcome, FetchOutcome::Stopped);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_run_transport_failure_terminates() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .reply(page_body([1, 2], true, Some("c1")))
            .fail("connection reset")
            .reply(page_body([3], false, Some("c2"))),
    );
    let mut fetcher = fetcher(transport.clone());
    let mut pages = 0;

    let err = fetcher
        .run(&CancellationToken::new(), |_| {
            pages += 1;
            ControlFlow::Continue(())
        })
        .await
        .unwrap_err();

    assert!(err.is_transport_failure());
    assert_eq!(pages, 1);
    // No retry after the failure.
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_run_malformed_response_terminates() {
    let transport = Arc::new(ScriptedTransport::new().reply("not json".to_string()));
    let mut fetcher = fetcher(transport);

    let err = fetcher
        .run(&CancellationToken::new(), |_| ControlFlow::Continue(()))
        .await
        .unwrap_err();
    assert!(err.is_malformed_response());
}

#[tokio::test]
async fn test_run_hands_over_page_before_missing_cursor_fails() {
    let transport = Arc::new(ScriptedTransport::new().reply(page_body([1, 2], true, None)));
    let mut fetcher = fetcher(transport.clone());
    let mut seen = Vec::new();

    let err = fetcher
        .run(&CancellationToken::new(), |page| {
            seen.push(page.issues.len());
            ControlFlow::Continue(())
        })
        .await
        .unwrap_err();

    assert!(err.is_malformed_response());
    assert_eq!(seen, vec![2]);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_run_cancelled_before_first_request() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let mut fetcher = fetcher(transport.clone());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = fetcher
        .run(&cancel, |_| ControlFlow::Continue(()))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_run_cancelled_after_page() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let mut fetcher = fetcher(transport.clone());
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();

    let err = fetcher
        .run(&cancel, |_| {
            canceller.cancel();
            ControlFlow::Continue(())
        })
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_page_delay_is_applied_before_each_request() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let mut fetcher = IssueFetcher::new(
        transport,
        Arc::new(StaticToken::new("test-token")),
        Repository::new("dotnet", "roslyn"),
        FetchConfig::new().with_page_delay(Duration::from_millis(20)),
    );

    let start = Instant::now();
    fetcher
        .run(&CancellationToken::new(), |_| ControlFlow::Continue(()))
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(40));
}

#[tokio::test]
async fn test_missing_token_terminates_fetch() {
    let transport = Arc::new(ScriptedTransport::two_pages());
    let fetcher = IssueFetcher::new(
        transport.clone(),
        Arc::new(crate::auth::EnvToken::new("ISSUE_FEED_ENGINE_TEST_NO_TOKEN")),
        Repository::new("dotnet", "roslyn"),
        FetchConfig::new().with_page_delay(Duration::ZERO),
    );

    let err = fetcher.fetch_page(&CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, crate::Error::MissingConfigField { .. }));
    assert_eq!(transport.request_count(), 0);
}
