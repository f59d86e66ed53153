//! Domain-focused tests for task payload validation and filtering.

use crate::board::domain::{
    BoardDomainError, CommentDraft, TaskDraft, TaskId, TaskPatch, TaskPriority, TaskStatus,
};
use crate::test_support::utc;
use rstest::rstest;
use serde_json::{Map, Value, json};

#[rstest]
#[case("backlog", TaskStatus::Backlog)]
#[case("todo", TaskStatus::Todo)]
#[case("doing", TaskStatus::Doing)]
#[case("done", TaskStatus::Done)]
#[case("  DONE  ", TaskStatus::Done)]
fn task_status_parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw).expect("valid status"), expected);
}

#[rstest]
fn task_status_rejects_unknown_value() {
    let result = TaskStatus::try_from("shipped");
    assert!(result.is_err());
}

#[rstest]
#[case("low", TaskPriority::Low)]
#[case("critical", TaskPriority::Critical)]
fn task_priority_parses_known_values(#[case] raw: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(raw).expect("valid priority"), expected);
}

#[rstest]
fn task_draft_trims_title_and_applies_defaults() {
    let draft = TaskDraft::new("  Ship the dashboard  ").expect("valid draft");

    assert_eq!(draft.title(), "Ship the dashboard");
    assert_eq!(draft.status(), TaskStatus::Backlog);
    assert_eq!(draft.priority(), TaskPriority::Medium);
    assert!(draft.description().is_none());
}

#[rstest]
fn task_draft_rejects_blank_title() {
    assert_eq!(
        TaskDraft::new("   "),
        Err(BoardDomainError::EmptyTaskTitle)
    );
}

#[rstest]
fn task_draft_insert_payload_omits_unset_columns() {
    let draft = TaskDraft::new("Write outreach notes")
        .expect("valid draft")
        .with_priority(TaskPriority::High);
    let payload = draft.insert_payload();

    assert_eq!(payload.get("title"), Some(&json!("Write outreach notes")));
    assert_eq!(payload.get("priority"), Some(&json!("high")));
    assert_eq!(payload.get("status"), Some(&json!("backlog")));
    assert!(!payload.contains_key("description"));
    assert!(!payload.contains_key("due"));
}

fn body_from(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object body, got {other}"),
    }
}

#[rstest]
fn task_patch_keeps_only_updatable_columns() {
    let body = body_from(json!({
        "id": "dc4c70cd-9874-4c2f-b01c-1c8b0532ad76",
        "title": "Renamed",
        "status": "doing",
        "created_at": "2020-01-01T00:00:00Z",
        "comment_count": 99,
        "secret_column": true,
    }));
    let patch = TaskPatch::from_json(&body);

    assert_eq!(patch.fields().get("title"), Some(&json!("Renamed")));
    assert_eq!(patch.fields().get("status"), Some(&json!("doing")));
    assert!(!patch.fields().contains_key("id"));
    assert!(!patch.fields().contains_key("created_at"));
    assert!(!patch.fields().contains_key("comment_count"));
    assert!(!patch.fields().contains_key("secret_column"));
}

#[rstest]
fn task_patch_preserves_explicit_nulls() {
    let body = body_from(json!({ "description": null }));
    let patch = TaskPatch::from_json(&body);

    assert_eq!(patch.fields().get("description"), Some(&Value::Null));
}

#[rstest]
fn task_patch_payload_stamps_updated_at() {
    let body = body_from(json!({ "title": "Renamed" }));
    let patch = TaskPatch::from_json(&body);
    let stamped = utc(2026, 3, 4, 12, 30, 0);
    let payload = patch.payload_with_timestamp(stamped);

    assert_eq!(payload.get("title"), Some(&json!("Renamed")));
    assert_eq!(
        payload.get("updated_at"),
        Some(&json!(stamped.to_rfc3339()))
    );
}

#[rstest]
fn comment_draft_trims_body() {
    let draft = CommentDraft::new(TaskId::new(), "scott", "  looks good  ").expect("valid draft");
    assert_eq!(draft.body(), "looks good");
}

#[rstest]
fn comment_draft_rejects_blank_body() {
    assert_eq!(
        CommentDraft::new(TaskId::new(), "scott", "   "),
        Err(BoardDomainError::EmptyCommentBody)
    );
}

#[rstest]
fn comment_draft_rejects_blank_author() {
    assert_eq!(
        CommentDraft::new(TaskId::new(), "  ", "body"),
        Err(BoardDomainError::EmptyCommentAuthor)
    );
}

#[rstest]
fn task_id_rejects_malformed_uuid() {
    assert_eq!(
        TaskId::parse("not-a-uuid"),
        Err(BoardDomainError::InvalidTaskId("not-a-uuid".to_owned()))
    );
}
