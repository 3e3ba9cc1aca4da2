//! Router-level tests: requests go through the full middleware stack
//! in-process, backed by an in-memory database.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use vows_server::{Config, SeatingStorage, ServerState, api};

fn app() -> Router {
    let config = Config::with_overrides("/tmp/vows-test", 0);
    let storage = SeatingStorage::open_in_memory().unwrap();
    api::build_app(ServerState::with_storage(config, storage))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn rsvp(app: &Router, name: &str, email: &str) {
    let (status, _) = post(
        app,
        "/api/rsvp",
        json!({ "name": name, "email": email, "meal": "Fish" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "vows-server");
}

#[tokio::test]
async fn test_rsvp_builds_directory_in_submission_order() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/rsvp",
        json!({ "name": "Alice", "email": "alice@example.com", "meal": "Fish" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "RSVP submitted successfully!");

    rsvp(&app, "Bob", "bob@example.com").await;
    // Re-submission keeps Alice first
    rsvp(&app, "Alice B.", "ALICE@example.com").await;

    let (status, body) = get(&app, "/api/get-rsvps").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "names": ["Alice B.", "Bob"] }));
}

#[tokio::test]
async fn test_rsvp_missing_fields() {
    let app = app();

    let (status, body) = post(&app, "/api/rsvp", json!({ "name": "Alice" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields.");
    assert_eq!(body["code"], 4001);

    let (status, body) = post(
        &app,
        "/api/rsvp",
        json!({ "name": "Alice", "email": "nope", "meal": "Fish" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);
}

#[tokio::test]
async fn test_site_access() {
    let app = app();
    let config = Config::with_overrides("/tmp/vows-test", 0);

    let (status, body) = post(
        &app,
        "/api/access",
        json!({ "password": config.site_password() }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);

    let (_, body) = post(&app, "/api/access", json!({ "password": "wrong" })).await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn test_list_chart_round_trip() {
    let app = app();

    let (status, body) = get(&app, "/api/get-seating-chart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tables"].as_array().unwrap().len(), 17);
    assert_eq!(body["seatedGuests"], json!([]));

    let (status, body) = post(
        &app,
        "/api/save-seating-chart",
        json!({ "tables": [["Alice", "Bob"], [], ["Carol"]] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Seating chart saved successfully!");

    let (_, body) = get(&app, "/api/get-seating-chart").await;
    let tables = body["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 17);
    assert_eq!(tables[0], json!(["Alice", "Bob"]));
    assert_eq!(tables[2], json!(["Carol"]));
    assert_eq!(body["seatedGuests"], json!(["Alice", "Bob", "Carol"]));
}

#[tokio::test]
async fn test_save_rejects_invalid_tables() {
    let app = app();

    for body in [json!({}), json!({ "tables": "nope" }), json!({ "tables": null })] {
        let (status, response) = post(&app, "/api/save-seating-chart", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "Missing or invalid tables data.");

        let (status, _) = post(&app, "/api/save-seating-chart-2", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_canvas_chart_reports_unseated_names() {
    let app = app();
    rsvp(&app, "Alice", "alice@example.com").await;
    rsvp(&app, "Bob", "bob@example.com").await;
    rsvp(&app, "Carol", "carol@example.com").await;

    let (status, _) = post(
        &app,
        "/api/save-seating-chart-2",
        json!({ "tables": [
            { "guests": ["Bob"], "x": 120, "y": 40 },
            { "guests": [], "x": 400, "y": 80 }
        ] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/get-seating-chart-2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["names"], json!(["Alice", "Carol"]));

    let tables = body["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 17);
    assert_eq!(tables[0], json!({ "guests": ["Bob"], "x": 120.0, "y": 40.0 }));
    // Empty tables keep their position
    assert_eq!(tables[1]["x"], 400.0);
    assert_eq!(tables[16], json!({ "guests": [], "x": 0.0, "y": 0.0 }));
}
