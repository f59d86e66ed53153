//! Service orchestration tests for cross-surface search.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{CommentDraft, TaskDraft},
    ports::BoardRepository,
};
use crate::pipeline::{
    adapters::memory::InMemoryPipelineRepository,
    domain::GuestDraft,
    ports::PipelineRepository,
};
use crate::search::{
    domain::SearchHitKind,
    services::SearchService,
};
use rstest::rstest;

type TestService = SearchService<InMemoryBoardRepository, InMemoryPipelineRepository>;

struct Harness {
    board: Arc<InMemoryBoardRepository>,
    pipeline: Arc<InMemoryPipelineRepository>,
    service: TestService,
}

fn harness() -> Harness {
    let board = Arc::new(InMemoryBoardRepository::new());
    let pipeline = Arc::new(InMemoryPipelineRepository::new());
    let service = SearchService::new(Arc::clone(&board), Arc::clone(&pipeline));
    Harness {
        board,
        pipeline,
        service,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn short_queries_return_no_results() {
    let fixture = harness();
    fixture
        .board
        .create_task(&TaskDraft::new("anything").expect("valid draft"))
        .await
        .expect("task creation should succeed");

    assert!(fixture.service.search("a").await.expect("search").is_empty());
    assert!(fixture.service.search("  x  ").await.expect("search").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn results_concatenate_tasks_comments_and_guests() {
    let fixture = harness();
    let task = fixture
        .board
        .create_task(
            &TaskDraft::new("Prep outreach batch")
                .expect("valid draft")
                .with_description("outreach emails for July"),
        )
        .await
        .expect("task creation should succeed");
    fixture
        .board
        .create_comment(
            &CommentDraft::new(task.id, "scott", "outreach list looks solid")
                .expect("valid draft"),
        )
        .await
        .expect("comment creation should succeed");
    fixture
        .pipeline
        .create_guest(&GuestDraft::new("Jane Doe", "Outreach Weekly").expect("valid draft"))
        .await
        .expect("guest creation should succeed");

    let hits = fixture
        .service
        .search("outreach")
        .await
        .expect("search should succeed");

    let kinds: Vec<SearchHitKind> = hits.iter().map(|hit| hit.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SearchHitKind::Task,
            SearchHitKind::Comment,
            SearchHitKind::Pipeline
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_match_field_prefers_the_title() {
    let fixture = harness();
    fixture
        .board
        .create_task(
            &TaskDraft::new("Review landing page")
                .expect("valid draft")
                .with_description("the landing page copy needs work"),
        )
        .await
        .expect("task creation should succeed");
    fixture
        .board
        .create_task(
            &TaskDraft::new("Misc chores")
                .expect("valid draft")
                .with_description("also mentions landing here"),
        )
        .await
        .expect("task creation should succeed");

    let hits = fixture
        .service
        .search("landing")
        .await
        .expect("search should succeed");

    let by_title = hits
        .iter()
        .find(|hit| hit.title == "Review landing page")
        .expect("title hit");
    assert_eq!(by_title.match_field, "title");

    let by_description = hits
        .iter()
        .find(|hit| hit.title == "Misc chores")
        .expect("description hit");
    assert_eq!(by_description.match_field, "description");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_hits_carry_their_parent_task() {
    let fixture = harness();
    let task = fixture
        .board
        .create_task(&TaskDraft::new("Publish article").expect("valid draft"))
        .await
        .expect("task creation should succeed");
    fixture
        .board
        .create_comment(
            &CommentDraft::new(task.id, "arlo", "substack draft is ready").expect("valid draft"),
        )
        .await
        .expect("comment creation should succeed");

    let hits = fixture
        .service
        .search("substack")
        .await
        .expect("search should succeed");

    let hit = hits.first().expect("one hit");
    assert_eq!(hit.kind, SearchHitKind::Comment);
    assert_eq!(hit.title, "Comment by arlo");
    assert_eq!(hit.parent_id.as_deref(), Some(task.id.to_string().as_str()));
    assert_eq!(hit.parent_title.as_deref(), Some("Publish article"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guest_match_field_precedence_is_podcast_then_notes_then_host() {
    let fixture = harness();
    fixture
        .pipeline
        .create_guest(&GuestDraft::new("Ada Deal", "Deal Flow Radio").expect("valid draft"))
        .await
        .expect("guest creation should succeed");

    let hits = fixture
        .service
        .search("deal")
        .await
        .expect("search should succeed");

    // Host and podcast both match; the podcast name wins.
    let hit = hits.first().expect("one hit");
    assert_eq!(hit.match_field, "podcast_name");
    assert_eq!(hit.title, "Ada Deal - Deal Flow Radio");
}
