//! Service orchestration tests for the kanban board.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::BoardDomainError,
    services::{
        BoardService, BoardServiceError, CreateCommentRequest, CreateTaskRequest,
        UpdateTaskRequest,
    },
};
use crate::test_support::{FixedClock, utc};
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

type TestService = BoardService<InMemoryBoardRepository, FixedClock>;

#[fixture]
fn service() -> TestService {
    let clock = FixedClock(utc(2026, 2, 1, 9, 0, 0));
    BoardService::new(
        Arc::new(InMemoryBoardRepository::with_clock(Arc::new(clock))),
        Arc::new(clock),
    )
}

fn fields_from(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object body, got {other}"),
    }
}

fn title_request(title: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        title: title.to_owned(),
        ..CreateTaskRequest::default()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_is_listed_with_zero_comments(service: TestService) {
    let created = service
        .create_task(title_request("Draft outreach email"))
        .await
        .expect("task creation should succeed");

    let tasks = service.list_tasks(None).await.expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
    let listed = tasks.first().expect("one task");
    assert_eq!(listed.id, created.id);
    assert_eq!(listed.comment_count, Some(0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_filters_by_status(service: TestService) {
    let request = CreateTaskRequest {
        title: "In flight".to_owned(),
        status: Some("doing".to_owned()),
        ..CreateTaskRequest::default()
    };
    service
        .create_task(request)
        .await
        .expect("task creation should succeed");
    service
        .create_task(title_request("Still waiting"))
        .await
        .expect("task creation should succeed");

    let doing = service
        .list_tasks(Some("doing"))
        .await
        .expect("listing should succeed");
    assert_eq!(doing.len(), 1);
    assert_eq!(doing.first().expect("one task").title, "In flight");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_rejects_unknown_status(service: TestService) {
    let result = service.list_tasks(Some("shipped")).await;
    assert!(matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::InvalidStatus(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_applies_whitelisted_fields_and_stamps_clock(service: TestService) {
    let created = service
        .create_task(title_request("Review pipeline"))
        .await
        .expect("task creation should succeed");

    let updated = service
        .update_task(UpdateTaskRequest {
            id: created.id.to_string(),
            fields: fields_from(json!({
                "status": "doing",
                "comment_count": 42,
                "created_at": "1999-01-01T00:00:00Z",
            })),
        })
        .await
        .expect("update should succeed")
        .expect("task should exist");

    assert_eq!(updated.status.as_str(), "doing");
    assert_eq!(updated.updated_at, utc(2026, 2, 1, 9, 0, 0));
    // The non-whitelisted columns must not have been forwarded.
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.comment_count, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_returns_none_for_unknown_id(service: TestService) {
    let result = service
        .update_task(UpdateTaskRequest {
            id: "5b4c1de1-62d0-4f9b-a35e-4bd6af3b4c5a".to_owned(),
            fields: fields_from(json!({ "title": "ghost" })),
        })
        .await
        .expect("update should succeed");
    assert!(result.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_requires_an_id(service: TestService) {
    let result = service
        .update_task(UpdateTaskRequest {
            id: String::new(),
            fields: Map::new(),
        })
        .await;
    assert!(matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::MissingTaskId))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_removes_the_row(service: TestService) {
    let created = service
        .create_task(title_request("Temporary"))
        .await
        .expect("task creation should succeed");

    service
        .delete_task(&created.id.to_string())
        .await
        .expect("delete should succeed");

    let tasks = service.list_tasks(None).await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_round_trip_and_count_on_listing(service: TestService) {
    let task = service
        .create_task(title_request("Collect feedback"))
        .await
        .expect("task creation should succeed");

    service
        .create_comment(CreateCommentRequest {
            task_id: task.id.to_string(),
            author: "scott".to_owned(),
            body: "ping the host".to_owned(),
        })
        .await
        .expect("comment creation should succeed");
    service
        .create_comment(CreateCommentRequest {
            task_id: task.id.to_string(),
            author: "arlo".to_owned(),
            body: "done".to_owned(),
        })
        .await
        .expect("comment creation should succeed");

    let comments = service
        .list_comments(&task.id.to_string())
        .await
        .expect("listing should succeed");
    assert_eq!(comments.len(), 2);

    let tasks = service.list_tasks(None).await.expect("listing should succeed");
    assert_eq!(tasks.first().expect("one task").comment_count, Some(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_comment_rejects_blank_body(service: TestService) {
    let task = service
        .create_task(title_request("Needs review"))
        .await
        .expect("task creation should succeed");

    let result = service
        .create_comment(CreateCommentRequest {
            task_id: task.id.to_string(),
            author: "scott".to_owned(),
            body: "   ".to_owned(),
        })
        .await;
    assert!(matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::EmptyCommentBody))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_tasks_matches_case_insensitively(service: TestService) {
    let request = CreateTaskRequest {
        title: "Write LinkedIn post".to_owned(),
        description: Some("Schedule for Monday".to_owned()),
        ..CreateTaskRequest::default()
    };
    service
        .create_task(request)
        .await
        .expect("task creation should succeed");

    let by_title = service
        .search_tasks("linkedin", 20)
        .await
        .expect("search should succeed");
    assert_eq!(by_title.len(), 1);

    let by_description = service
        .search_tasks("MONDAY", 20)
        .await
        .expect("search should succeed");
    assert_eq!(by_description.len(), 1);

    let no_match = service
        .search_tasks("substack", 20)
        .await
        .expect("search should succeed");
    assert!(no_match.is_empty());
}
