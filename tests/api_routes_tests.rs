use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use membership_directory::{
    Config, DirectoryStorage,
    db::models::{MembershipStatus, NewAccreditation, NewProvider},
    router::{DirectoryState, directory_router},
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn setup() -> (DirectoryStorage, Router) {
    let storage = DirectoryStorage::in_memory()
        .await
        .expect("failed to open in-memory storage");
    let state = DirectoryState::new(storage.clone());
    let app = directory_router(state, &Config::default().allowed_origins());
    (storage, app)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = serde_json::from_slice(&body).expect("response body was not JSON");
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("failed to build request")
}

fn contact_body() -> Value {
    json!({
        "providerId": 1,
        "inquirerName": "Grace Hopper",
        "inquirerEmail": "grace@example.com",
        "inquirerPhone": "555-0100",
        "subject": "Appointment",
        "message": "Do you have openings next week?"
    })
}

#[tokio::test]
async fn root_reports_name_and_version() {
    let (_, app) = setup().await;
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Graston Membership Directory API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
}

#[tokio::test]
async fn provider_listing_only_includes_visible_active_providers() {
    let (storage, app) = setup().await;
    let listed = storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();
    storage
        .insert_provider(NewProvider {
            show_in_directory: Some(false),
            ..NewProvider::new("b@x.com", "Hidden", "Provider")
        })
        .await
        .unwrap();
    storage
        .insert_provider(NewProvider {
            membership_status: Some(MembershipStatus::Inactive),
            ..NewProvider::new("c@x.com", "Lapsed", "Provider")
        })
        .await
        .unwrap();

    let (status, body) = send(&app, get("/api/providers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], listed.id);
    assert_eq!(data[0]["email"], "a@x.com");
    assert_eq!(data[0]["membershipStatus"], "ACTIVE");
    assert_eq!(data[0]["showInDirectory"], true);
}

#[tokio::test]
async fn provider_by_id_returns_stored_row() {
    let (storage, app) = setup().await;
    let p = storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();

    let (status, body) = send(&app, get(&format!("/api/providers/{}", p.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], serde_json::to_value(&p).unwrap());
}

#[tokio::test]
async fn provider_by_id_missing_is_404() {
    let (_, app) = setup().await;

    for uri in ["/api/providers/404", "/api/providers/not-a-number"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"success": false, "error": "Provider not found"})
        );
    }
}

#[tokio::test]
async fn contact_submission_inserts_new_inquiry() {
    let (storage, app) = setup().await;
    let p = storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();

    let mut payload = contact_body();
    payload["providerId"] = json!(p.id.to_string());
    let (status, body) = send(&app, post("/api/contact", payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"]["id"].as_i64().is_some_and(|id| id > 0));
    assert_eq!(body["data"]["status"], "NEW");
    assert_eq!(body["data"]["providerId"], p.id);
    assert_eq!(body["data"]["subject"], "Appointment");

    let stored = storage.list_contact_inquiries(p.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, body["data"]["id"].as_i64().unwrap());
}

#[tokio::test]
async fn contact_submission_missing_fields_is_400_without_insert() {
    let (storage, app) = setup().await;
    let p = storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();

    for field in ["providerId", "inquirerName", "inquirerEmail", "message"] {
        let mut payload = contact_body();
        payload["providerId"] = json!(p.id);
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = send(&app, post("/api/contact", payload.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Missing required fields: providerId, inquirerName, inquirerEmail, message"
        );
    }

    assert!(storage.list_contact_inquiries(p.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_submission_with_unknown_field_is_400() {
    let (storage, app) = setup().await;
    let p = storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();

    let mut payload = contact_body();
    payload["providerId"] = json!(p.id);
    payload["status"] = json!("ARCHIVED");
    let (status, body) = send(&app, post("/api/contact", payload.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(storage.list_contact_inquiries(p.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_submission_storage_failures_are_500() {
    let (_, app) = setup().await;

    // unknown provider -> foreign key violation
    let (status, body) = send(&app, post("/api/contact", contact_body().to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "error": "Failed to submit contact inquiry"})
    );

    let (status, body) = send(&app, post("/api/contact", "{not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to submit contact inquiry");
}

#[tokio::test]
async fn accreditations_are_active_and_ordered() {
    let (storage, app) = setup().await;
    for (name, order, active) in [
        ("Sports Medicine", 3, true),
        ("Clinical", 1, true),
        ("Legacy", 0, false),
        ("Advanced", 1, true),
    ] {
        storage
            .insert_accreditation(NewAccreditation {
                name: name.to_string(),
                display_order: Some(order),
                active: Some(active),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let (status, body) = send(&app, get("/api/accreditations")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|a| a["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Clinical", "Advanced", "Sports Medicine"]);
}

#[tokio::test]
async fn wordpress_sync_acknowledges_without_persisting() {
    let (storage, app) = setup().await;

    let (status, body) = send(
        &app,
        post("/api/sync/wordpress", json!({"post_id": 9, "action": "update"}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Sync initiated"}));
    assert!(storage.list_sync_log(10).await.unwrap().is_empty());

    let (status, body) = send(&app, post("/api/sync/wordpress", "<xml/>")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "error": "Sync failed"}));
}

#[tokio::test]
async fn cors_allows_configured_origin_only() {
    let (_, app) = setup().await;

    let preflight = |origin: &str| {
        Request::builder()
            .method("OPTIONS")
            .uri("/api/providers")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .expect("failed to build request")
    };

    let resp = app
        .clone()
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );

    let resp = app
        .clone()
        .oneshot(preflight("https://evil.example"))
        .await
        .unwrap();
    assert!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn deleted_provider_disappears_from_api() {
    let (storage, app) = setup().await;
    let p = storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();
    let mut payload = contact_body();
    payload["providerId"] = json!(p.id);
    let (status, _) = send(&app, post("/api/contact", payload.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    assert!(storage.delete_provider(p.id).await.unwrap());

    let (status, _) = send(&app, get(&format!("/api/providers/{}", p.id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(storage.list_contact_inquiries(p.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_iso_date_cannot_break_provider_listing() {
    let (storage, app) = setup().await;
    storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();
    let b = storage
        .insert_provider(NewProvider::new("b@x.com", "Bo", "Diddley"))
        .await
        .unwrap();

    let update = sqlx::query("UPDATE providers SET certification_date = 'March 2024' WHERE id = ?")
        .bind(b.id)
        .execute(storage.pool())
        .await;
    assert!(update.is_err());

    let (status, body) = send(&app, get("/api/providers")).await;
    assert_eq!(status, StatusCode::OK);
    let emails: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|p| p["email"].as_str())
        .collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
}

#[tokio::test]
async fn read_routes_report_storage_failures_as_500() {
    let (storage, app) = setup().await;
    storage.pool().close().await;

    for (uri, message) in [
        ("/api/providers", "Failed to fetch providers"),
        ("/api/providers/1", "Failed to fetch provider"),
        ("/api/accreditations", "Failed to fetch accreditations"),
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({"success": false, "error": message}), "{uri}");
    }
}

#[tokio::test]
async fn provider_id_with_trailing_garbage_is_404() {
    let (storage, app) = setup().await;
    let p = storage
        .insert_provider(NewProvider::new("a@x.com", "Ada", "Lovelace"))
        .await
        .unwrap();

    let (status, body) = send(&app, get(&format!("/api/providers/{}abc", p.id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Provider not found");

    let mut payload = contact_body();
    payload["providerId"] = json!(format!("{}abc", p.id));
    let (status, _) = send(&app, post("/api/contact", payload.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(storage.list_contact_inquiries(p.id).await.unwrap().is_empty());
}
