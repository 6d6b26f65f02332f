#![allow(clippy::unwrap_used)]
// Integration tests for `WorkshopClient` using wiremock.

use serde_json::json;
use url::Url;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fixly_api::{DeviceRecord, Error, PartRecord, WorkshopClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, WorkshopClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = WorkshopClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn sample_part() -> PartRecord {
    PartRecord {
        id: Uuid::new_v4(),
        name: "10uF 25V".into(),
        part_type: "CAPACITOR".into(),
        subtype: Some("electrolytic".into()),
        quantity: 5,
        in_stock: true,
    }
}

// ── Readiness probe ─────────────────────────────────────────────────

#[tokio::test]
async fn ensure_schema_accepts_ok_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/setup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    client.ensure_schema().await.unwrap();
}

#[tokio::test]
async fn ensure_schema_rejects_html_error_page() {
    let (server, client) = setup().await;

    // A captive portal / proxy answering 200 with markup must not count
    // as a reachable server.
    Mock::given(method("POST"))
        .and(path("/api/v1/setup"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>It works!</body></html>")
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let result = client.ensure_schema().await;
    assert!(
        matches!(result, Err(Error::UnexpectedContentType { .. })),
        "expected UnexpectedContentType, got: {result:?}"
    );
}

#[tokio::test]
async fn ensure_schema_rejects_failure_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/setup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error": "database is locked"
        })))
        .mount(&server)
        .await;

    let result = client.ensure_schema().await;
    match result {
        Err(Error::Api { message, status }) => {
            assert_eq!(message, "database is locked");
            assert_eq!(status, 200);
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn ensure_schema_rejects_server_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/setup"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.ensure_schema().await;
    assert!(
        matches!(result, Err(Error::Api { status: 500, .. })),
        "expected Api error with status 500, got: {result:?}"
    );
}

// ── Devices ─────────────────────────────────────────────────────────

#[tokio::test]
async fn list_devices_unwraps_envelope() {
    let (server, client) = setup().await;

    let envelope = json!({
        "ok": true,
        "data": [{
            "id": "0a0f7f2e-5a93-4f3c-9d25-47e8e7a6b1c2",
            "clientName": "Ivanov",
            "deviceModel": "Vacuum X1",
            "issueDescription": "does not power on",
            "dateReceived": "2026-03-01T09:00:00Z",
            "status": "RECEIVED",
            "statusChangedAt": "2026-03-01T09:00:00Z",
            "urgency": "NORMAL",
            "isPlanned": false,
            "notes": null
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].client_name, "Ivanov");
    assert_eq!(devices[0].device_model, "Vacuum X1");
    assert_eq!(devices[0].status, "RECEIVED");
    assert!(!devices[0].is_planned);
}

#[tokio::test]
async fn list_devices_defaults_optional_fields() {
    let (server, client) = setup().await;

    // Older server rows may omit issueDescription / isPlanned / notes.
    let envelope = json!({
        "ok": true,
        "data": [{
            "id": "0a0f7f2e-5a93-4f3c-9d25-47e8e7a6b1c2",
            "clientName": "Petrov",
            "deviceModel": "Amp A2",
            "dateReceived": "2026-03-02T10:00:00Z",
            "status": "READY",
            "statusChangedAt": "2026-03-03T12:00:00Z",
            "urgency": "HIGH"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices[0].issue_description, "");
    assert!(!devices[0].is_planned);
    assert_eq!(devices[0].notes, None);
}

#[tokio::test]
async fn upsert_device_sends_full_record() {
    let (server, client) = setup().await;

    let record = DeviceRecord {
        id: Uuid::new_v4(),
        client_name: "Ivanov".into(),
        device_model: "Vacuum X1".into(),
        issue_description: "does not power on".into(),
        date_received: "2026-03-01T09:00:00Z".parse().unwrap(),
        status: "IN_PROGRESS".into(),
        status_changed_at: "2026-03-02T09:00:00Z".parse().unwrap(),
        urgency: "NORMAL".into(),
        is_planned: true,
        notes: Some("fuse replaced".into()),
    };

    Mock::given(method("PUT"))
        .and(path("/api/v1/devices"))
        .and(body_json(&record))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    client.upsert_device(&record).await.unwrap();
}

#[tokio::test]
async fn delete_device_accepts_absent_id() {
    let (server, client) = setup().await;

    let id = Uuid::new_v4();

    // The server reports success for absent ids -- delete is a no-op.
    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/devices/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    client.delete_device(id).await.unwrap();
}

// ── Parts ───────────────────────────────────────────────────────────

#[tokio::test]
async fn part_roundtrip_through_envelope() {
    let (server, client) = setup().await;

    let record = sample_part();

    Mock::given(method("PUT"))
        .and(path("/api/v1/parts"))
        .and(body_json(&record))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let envelope = json!({ "ok": true, "data": [record] });
    Mock::given(method("GET"))
        .and(path("/api/v1/parts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    client.upsert_part(&record).await.unwrap();
    let parts = client.list_parts().await.unwrap();

    assert_eq!(parts, vec![record]);
}

#[tokio::test]
async fn list_parts_surfaces_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/parts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{\"ok\": tru", "application/json"),
        )
        .mount(&server)
        .await;

    let result = client.list_parts().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Advice ──────────────────────────────────────────────────────────

#[tokio::test]
async fn advice_returns_text() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/advice"))
        .and(body_json(json!({ "prompt": "TV has no backlight" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "data": { "text": "Check the LED driver voltage first." }
        })))
        .mount(&server)
        .await;

    let text = client.advice("TV has no backlight").await.unwrap();
    assert_eq!(text, "Check the LED driver voltage first.");
}
