//! End-to-end tests for the `/api/*` surface over in-memory adapters.

use std::sync::Arc;

use arlo_board::board::adapters::memory::InMemoryBoardRepository;
use arlo_board::files::adapters::memory::InMemoryFileStore;
use arlo_board::files::ports::FileStore;
use arlo_board::http::{AppState, router};
use arlo_board::pipeline::adapters::memory::InMemoryPipelineRepository;
use arlo_board::revenue::adapters::memory::InMemoryBalanceFeed;
use arlo_board::workflow::adapters::memory::InMemoryWorkflowRepository;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use serde_json::{Value, json};
use tower::ServiceExt;

struct Harness {
    app: Router,
    files: Arc<InMemoryFileStore>,
}

fn harness() -> Harness {
    let board = Arc::new(InMemoryBoardRepository::new());
    let pipeline = Arc::new(InMemoryPipelineRepository::new());
    let files = Arc::new(InMemoryFileStore::new());
    let feed = Arc::new(InMemoryBalanceFeed::new());
    let workflow = Arc::new(InMemoryWorkflowRepository::new());

    let store: Arc<dyn FileStore> = files.clone();
    let state = AppState::assemble(
        board,
        pipeline,
        store,
        feed,
        workflow,
        Arc::new(DefaultClock),
        "/clawd",
    );
    Harness {
        app: router(Arc::new(state)),
        files,
    }
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test(flavor = "multi_thread")]
async fn tasks_round_trip_through_the_api() {
    let fixture = harness();

    let (status, created) = post(
        &fixture.app,
        "/api/tasks/create",
        json!({ "title": "Ship the dashboard", "priority": "high" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["task"]["title"], "Ship the dashboard");
    assert_eq!(created["task"]["priority"], "high");

    let (status, listed) = post(&fixture.app, "/api/tasks/list", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let tasks = listed["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["comment_count"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_creation_requires_a_title() {
    let fixture = harness();
    let (status, body) = post(&fixture.app, "/api/tasks/create", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "task title must not be empty");
}

#[tokio::test(flavor = "multi_thread")]
async fn task_updates_ignore_non_whitelisted_columns() {
    let fixture = harness();
    let (_, created) = post(
        &fixture.app,
        "/api/tasks/create",
        json!({ "title": "Guarded" }),
    )
    .await;
    let id = created["task"]["id"].as_str().expect("task id").to_owned();
    let created_at = created["task"]["created_at"].clone();

    let (status, updated) = post(
        &fixture.app,
        "/api/tasks/update",
        json!({
            "id": id,
            "status": "doing",
            "created_at": "1999-01-01T00:00:00Z",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["task"]["status"], "doing");
    assert_eq!(updated["task"]["created_at"], created_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn comments_attach_to_their_task() {
    let fixture = harness();
    let (_, created) = post(
        &fixture.app,
        "/api/tasks/create",
        json!({ "title": "Discuss" }),
    )
    .await;
    let id = created["task"]["id"].as_str().expect("task id").to_owned();

    let (status, comment) = post(
        &fixture.app,
        "/api/comments/create",
        json!({ "task_id": id, "author": "scott", "body": "on it" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["comment"]["body"], "on it");

    let (_, comments) = post(&fixture.app, "/api/comments/list", json!({ "task_id": id })).await;
    assert_eq!(
        comments["comments"].as_array().expect("comments").len(),
        1
    );

    let (_, listed) = post(&fixture.app, "/api/tasks/list", json!({})).await;
    assert_eq!(listed["tasks"][0]["comment_count"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn pipeline_round_trip_and_validation() {
    let fixture = harness();

    let (status, body) = post(
        &fixture.app,
        "/api/pipeline/create",
        json!({ "podcast_name": "Land Talk" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "host name is required");

    let (status, created) = post(
        &fixture.app,
        "/api/pipeline/create",
        json!({
            "host_name": "Jane Doe",
            "podcast_name": "Land Talk",
            "status": "outreach",
            "channel": "email",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["guest"]["status"], "outreach");
    assert_eq!(created["guest"]["channel"], "email");

    let (_, listed) = post(
        &fixture.app,
        "/api/pipeline/list",
        json!({ "status": "outreach" }),
    )
    .await;
    assert_eq!(listed["guests"].as_array().expect("guests").len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn file_routes_enforce_the_root_boundary() {
    let fixture = harness();
    fixture.files.seed_file("/clawd/notes/today.md", "# Today");

    let (status, body) = post(
        &fixture.app,
        "/api/files/read",
        json!({ "path": "/notes/../../etc/passwd" }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied");

    let (status, read) = post(
        &fixture.app,
        "/api/files/read",
        json!({ "path": "/notes/today.md" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["content"], "# Today");
    assert_eq!(read["metadata"]["name"], "today.md");

    let (status, body) = post(&fixture.app, "/api/files/read", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Path is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn file_listing_returns_sorted_entries() {
    let fixture = harness();
    fixture.files.seed_folder("/clawd/notes");
    fixture.files.seed_file("/clawd/zeta.md", "z");

    let (status, listed) = post(&fixture.app, "/api/files/list", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let entries = listed["entries"].as_array().expect("entries");
    assert_eq!(entries[0]["name"], "notes");
    assert_eq!(entries[0]["type"], "folder");
    assert_eq!(entries[1]["name"], "zeta.md");
    assert_eq!(entries[1]["extension"], "md");
}

#[tokio::test(flavor = "multi_thread")]
async fn revenue_rejects_unknown_accounts() {
    let fixture = harness();
    let (status, body) = post(
        &fixture.app,
        "/api/revenue/stripe",
        json!({ "account": "acme" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid account: acme");
}

#[tokio::test(flavor = "multi_thread")]
async fn revenue_sums_seeded_windows() {
    let fixture = harness();
    let (status, body) = post(
        &fixture.app,
        "/api/revenue/stripe",
        json!({ "account": "landmodo" }),
    )
    .await;

    // No seeded transactions: every window sums to zero.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["today"], 0.0);
    assert_eq!(body["mtd"], 0.0);
    assert_eq!(body["ytd"], 0.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_concatenates_across_surfaces() {
    let fixture = harness();
    post(
        &fixture.app,
        "/api/tasks/create",
        json!({ "title": "Outreach batch" }),
    )
    .await;
    post(
        &fixture.app,
        "/api/pipeline/create",
        json!({ "host_name": "Jane", "podcast_name": "Outreach Weekly" }),
    )
    .await;

    let (status, body) = post(&fixture.app, "/api/search", json!({ "query": "outreach" })).await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["type"], "task");
    assert_eq!(results[1]["type"], "pipeline");

    let (status, short) = post(&fixture.app, "/api/search", json!({ "query": "x" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(short["results"].as_array().expect("results").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn workflow_list_returns_the_assembled_map() {
    let fixture = harness();
    let (status, body) = get(&fixture.app, "/api/workflow/list").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["lanes"].as_array().expect("lanes").is_empty());
    assert!(body["processes"].as_array().expect("processes").is_empty());
    assert!(body["routes"].as_object().expect("routes").is_empty());
}
