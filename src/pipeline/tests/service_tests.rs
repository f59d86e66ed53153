//! Service orchestration tests for the guest pipeline.

use std::sync::Arc;

use crate::pipeline::{
    adapters::memory::InMemoryPipelineRepository,
    domain::{GuestSource, GuestStatus, PipelineDomainError},
    services::{CreateGuestRequest, PipelineService, PipelineServiceError, UpdateGuestRequest},
};
use crate::test_support::{FixedClock, utc};
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

type TestService = PipelineService<InMemoryPipelineRepository, FixedClock>;

#[fixture]
fn service() -> TestService {
    let clock = FixedClock(utc(2026, 2, 1, 9, 0, 0));
    PipelineService::new(
        Arc::new(InMemoryPipelineRepository::with_clock(Arc::new(clock))),
        Arc::new(clock),
    )
}

fn fields_from(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object body, got {other}"),
    }
}

fn guest_request(host: &str, podcast: &str) -> CreateGuestRequest {
    CreateGuestRequest {
        host_name: host.to_owned(),
        podcast_name: podcast.to_owned(),
        ..CreateGuestRequest::default()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_guest_carries_optional_columns(service: TestService) {
    let request = CreateGuestRequest {
        host_name: "Jane Doe".to_owned(),
        podcast_name: "Land Talk".to_owned(),
        status: Some("outreach".to_owned()),
        fields: fields_from(json!({
            "source": "outbound",
            "channel": "email",
            "bogus_column": true,
        })),
    };

    let created = service
        .create_guest(request)
        .await
        .expect("guest creation should succeed");

    assert_eq!(created.status, GuestStatus::Outreach);
    assert_eq!(created.source, Some(GuestSource::Outbound));
    assert_eq!(created.channel.as_deref(), Some("email"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_guests_filters_by_status(service: TestService) {
    service
        .create_guest(guest_request("Jane Doe", "Land Talk"))
        .await
        .expect("guest creation should succeed");
    let request = CreateGuestRequest {
        status: Some("booked".to_owned()),
        ..guest_request("John Roe", "Deal Flow")
    };
    service
        .create_guest(request)
        .await
        .expect("guest creation should succeed");

    let booked = service
        .list_guests(Some("booked"))
        .await
        .expect("listing should succeed");
    assert_eq!(booked.len(), 1);
    assert_eq!(booked.first().expect("one guest").host_name, "John Roe");

    let all = service.list_guests(None).await.expect("listing should succeed");
    assert_eq!(all.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_guest_filters_columns_and_stamps_clock(service: TestService) {
    let created = service
        .create_guest(guest_request("Jane Doe", "Land Talk"))
        .await
        .expect("guest creation should succeed");

    let updated = service
        .update_guest(UpdateGuestRequest {
            id: created.id.to_string(),
            fields: fields_from(json!({
                "status": "follow_up",
                "follow_up_count": 2,
                "created_at": "1999-01-01T00:00:00Z",
            })),
        })
        .await
        .expect("update should succeed")
        .expect("guest should exist");

    assert_eq!(updated.status, GuestStatus::FollowUp);
    assert_eq!(updated.follow_up_count, 2);
    assert_eq!(updated.updated_at, utc(2026, 2, 1, 9, 0, 0));
    assert_eq!(updated.created_at, created.created_at);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_guest_requires_an_id(service: TestService) {
    let result = service
        .update_guest(UpdateGuestRequest {
            id: "  ".to_owned(),
            fields: Map::new(),
        })
        .await;
    assert!(matches!(
        result,
        Err(PipelineServiceError::Domain(
            PipelineDomainError::MissingGuestId
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_guest_removes_the_row(service: TestService) {
    let created = service
        .create_guest(guest_request("Jane Doe", "Land Talk"))
        .await
        .expect("guest creation should succeed");

    service
        .delete_guest(&created.id.to_string())
        .await
        .expect("delete should succeed");

    let all = service.list_guests(None).await.expect("listing should succeed");
    assert!(all.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_guests_matches_notes(service: TestService) {
    let request = CreateGuestRequest {
        fields: fields_from(json!({ "notes": "met at the land investing summit" })),
        ..guest_request("Jane Doe", "Land Talk")
    };
    service
        .create_guest(request)
        .await
        .expect("guest creation should succeed");

    let hits = service
        .search_guests("SUMMIT", 20)
        .await
        .expect("search should succeed");
    assert_eq!(hits.len(), 1);

    let none = service
        .search_guests("webinar", 20)
        .await
        .expect("search should succeed");
    assert!(none.is_empty());
}
