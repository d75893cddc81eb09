//! Tests for the issue model

use super::*;
use chrono::TimeZone;
use test_case::test_case;

fn issue_with_labels(labels: &[&str]) -> Issue {
    Issue {
        title: "Crash when opening solution".to_string(),
        url: "https://github.com/dotnet/roslyn/issues/1".parse().unwrap(),
        author: Author {
            login: "octocat".to_string(),
            url: "https://github.com/octocat".parse().unwrap(),
        },
        state: IssueState::Open,
        created_at: chrono::Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap(),
        labels: labels.iter().map(ToString::to_string).collect(),
    }
}

// ============================================================================
// IssueState Tests
// ============================================================================

#[test_case("OPEN", IssueState::Open)]
#[test_case("CLOSED", IssueState::Closed)]
#[test_case("MERGED", IssueState::Unknown)]
#[test_case("open", IssueState::Unknown)]
#[test_case("", IssueState::Unknown)]
fn test_issue_state_from_wire(wire: &str, expected: IssueState) {
    assert_eq!(IssueState::from_wire(wire), expected);
}

#[test]
fn test_issue_state_serde() {
    assert_eq!(
        serde_json::to_string(&IssueState::Closed).unwrap(),
        "\"CLOSED\""
    );
    assert_eq!(IssueState::default(), IssueState::Unknown);
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test_case(&[], ""; "no labels")]
#[test_case(&["bug", "help wanted"], ""; "no matching prefix")]
#[test_case(&["Area-Compilers"], "Compilers"; "area prefix")]
#[test_case(&["IDE-Navigation"], "Navigation"; "ide prefix")]
#[test_case(&["New Feature - Records"], "Records"; "new feature prefix")]
#[test_case(&["New Language Feature - Nullable"], "Nullable"; "new language feature prefix")]
#[test_case(&["Resolution-Duplicate"], "Duplicate"; "resolution prefix")]
#[test_case(&["Area-IDE", "New Feature - Tuples"], "Tuples"; "language feature beats subsystem")]
#[test_case(&["New Feature - Tuples", "Area-IDE"], "Tuples"; "language feature beats subsystem in any order")]
#[test_case(&["Resolution-Fixed", "Area-Compilers"], "Compilers"; "subsystem beats resolution")]
#[test_case(&["Area-Compilers", "IDE-Completion"], "Completion"; "last subsystem wins")]
#[test_case(&["New Feature - A", "New Language Feature - B"], "B"; "last language feature wins")]
#[test_case(&["area-"], ""; "empty value does not count")]
#[test_case(&["area-", "Resolution-Won't Fix"], "Won't Fix"; "empty subsystem falls through to resolution")]
#[test_case(&["Area-Compilers", "area-"], ""; "later empty value overwrites earlier one")]
#[test_case(&["ar"], ""; "label shorter than prefix")]
#[test_case(&["área-x"], ""; "non ascii label")]
fn test_categorize(labels: &[&str], expected: &str) {
    assert_eq!(categorize(labels), expected);
}

#[test]
fn test_categorize_is_deterministic() {
    let labels = vec![
        "Resolution-External".to_string(),
        "Area-Analyzers".to_string(),
        "Area-Compilers".to_string(),
    ];
    let first = categorize(&labels);
    for _ in 0..10 {
        assert_eq!(categorize(&labels), first);
    }
    assert_eq!(first, "Compilers");
}

#[test]
fn test_issue_category() {
    let issue = issue_with_labels(&["Bug", "Area-Compilers", "Resolution-Fixed"]);
    assert_eq!(issue.category(), "Compilers");
    assert!(issue.is_open());
}

#[test]
fn test_issue_labels_keep_order_and_duplicates() {
    let issue = issue_with_labels(&["b", "a", "b"]);
    assert_eq!(issue.labels, vec!["b", "a", "b"]);
}
