//! Domain-focused tests for guest payload validation and filtering.

use crate::pipeline::domain::{
    GuestDraft, GuestPatch, GuestSource, GuestStatus, PipelineDomainError,
};
use rstest::rstest;
use serde_json::{Map, Value, json};

fn body_from(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object body, got {other}"),
    }
}

#[rstest]
#[case("prospect", GuestStatus::Prospect)]
#[case("follow_up", GuestStatus::FollowUp)]
#[case("DECLINED", GuestStatus::Declined)]
fn guest_status_parses_known_values(#[case] raw: &str, #[case] expected: GuestStatus) {
    assert_eq!(GuestStatus::try_from(raw).expect("valid status"), expected);
}

#[rstest]
fn guest_status_rejects_unknown_value() {
    assert!(GuestStatus::try_from("ghosted").is_err());
}

#[rstest]
fn guest_source_parses_known_values() {
    assert_eq!(
        GuestSource::try_from("inbound").expect("valid source"),
        GuestSource::Inbound
    );
    assert!(GuestSource::try_from("sideways").is_err());
}

#[rstest]
fn guest_draft_trims_names_and_defaults_to_prospect() {
    let draft = GuestDraft::new("  Jane Doe ", " Land Talk ").expect("valid draft");

    assert_eq!(draft.host_name(), "Jane Doe");
    assert_eq!(draft.podcast_name(), "Land Talk");
    assert_eq!(draft.status(), GuestStatus::Prospect);
}

#[rstest]
fn guest_draft_rejects_blank_host_name() {
    assert_eq!(
        GuestDraft::new("  ", "Land Talk"),
        Err(PipelineDomainError::EmptyHostName)
    );
}

#[rstest]
fn guest_draft_rejects_blank_podcast_name() {
    assert_eq!(
        GuestDraft::new("Jane Doe", ""),
        Err(PipelineDomainError::EmptyPodcastName)
    );
}

#[rstest]
fn guest_draft_payload_overrides_names_from_extras() {
    let extras = GuestPatch::from_json(&body_from(json!({
        "host_name": "spoofed",
        "channel": "email",
        "id": "not-allowed",
    })));
    let draft = GuestDraft::new("Jane Doe", "Land Talk")
        .expect("valid draft")
        .with_status(GuestStatus::Outreach)
        .with_extra(extras);
    let payload = draft.insert_payload();

    assert_eq!(payload.get("host_name"), Some(&json!("Jane Doe")));
    assert_eq!(payload.get("status"), Some(&json!("outreach")));
    assert_eq!(payload.get("channel"), Some(&json!("email")));
    assert!(!payload.contains_key("id"));
}

#[rstest]
fn guest_patch_keeps_only_updatable_columns() {
    let patch = GuestPatch::from_json(&body_from(json!({
        "status": "booked",
        "recording_platform": "Riverside",
        "id": "x",
        "created_at": "1999-01-01T00:00:00Z",
        "made_up": 1,
    })));

    assert_eq!(patch.fields().get("status"), Some(&json!("booked")));
    assert_eq!(
        patch.fields().get("recording_platform"),
        Some(&json!("Riverside"))
    );
    assert!(!patch.fields().contains_key("id"));
    assert!(!patch.fields().contains_key("created_at"));
    assert!(!patch.fields().contains_key("made_up"));
}
