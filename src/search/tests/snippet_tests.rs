//! Snippet extraction tests.

use crate::search::domain::{snippet, snippet_with_limit};
use rstest::rstest;

#[rstest]
fn short_text_with_match_returns_text_unchanged() {
    assert_eq!(snippet("hello world", "world"), "hello world");
}

#[rstest]
fn empty_text_returns_empty_string() {
    assert_eq!(snippet("", "anything"), "");
}

#[rstest]
fn match_is_case_insensitive() {
    assert_eq!(snippet("Hello World", "WORLD"), "Hello World");
}

#[rstest]
fn no_match_returns_prefix_without_ellipsis_when_short() {
    assert_eq!(snippet("short text", "zzz"), "short text");
}

#[rstest]
fn no_match_truncates_with_ellipsis() {
    let text = "a".repeat(150);
    let result = snippet(&text, "zzz");
    assert_eq!(result.chars().count(), 101);
    assert!(result.ends_with('…'));
}

#[rstest]
fn match_mid_text_is_ellipsized_on_both_ends() {
    let text = format!("{}needle{}", "x".repeat(100), "y".repeat(100));
    let result = snippet(&text, "needle");

    assert!(result.starts_with('…'));
    assert!(result.ends_with('…'));
    assert!(result.contains("needle"));
    // 30 before + 6 match + 50 after + two ellipses.
    assert_eq!(result.chars().count(), 88);
}

#[rstest]
fn match_near_start_keeps_the_left_edge() {
    let text = format!("needle{}", "y".repeat(100));
    let result = snippet(&text, "needle");

    assert!(!result.starts_with('…'));
    assert!(result.ends_with('…'));
    assert!(result.starts_with("needle"));
}

#[rstest]
fn match_near_end_keeps_the_right_edge() {
    let text = format!("{}needle", "x".repeat(100));
    let result = snippet(&text, "needle");

    assert!(result.starts_with('…'));
    assert!(result.ends_with("needle"));
}

#[rstest]
fn multibyte_text_never_splits_code_points() {
    let text = format!("{}été{}", "é".repeat(60), "à".repeat(60));
    let result = snippet(&text, "été");
    // Would panic on a byte-offset slice; character counting keeps it whole.
    assert!(result.contains("été"));
}

#[rstest]
fn custom_limit_applies_to_unmatched_prefix() {
    let result = snippet_with_limit("abcdefghij", "zzz", 4);
    assert_eq!(result, "abcd…");
}
