//! HTTP-level tests for the pulsed API surface.
//!
//! Drives the assembled router directly, without binding a listener.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pulse_common::store::TelemetryStore;
use pulse_common::types::TelemetryRecord;
use pulsed::server::{router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn record(region: &str, latency_ms: f64, uptime_percent: f64) -> TelemetryRecord {
    TelemetryRecord {
        region: region.to_string(),
        latency_ms,
        uptime_percent,
    }
}

fn app_with(records: Vec<TelemetryRecord>) -> Router {
    let store = TelemetryStore::from_records(records).expect("test records are valid");
    router(Arc::new(AppState::new(store)))
}

fn scenario_store() -> Vec<TelemetryRecord> {
    vec![
        record("us-east", 100.0, 99.9),
        record("us-east", 200.0, 99.5),
    ]
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_process(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/v1/telemetry/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn process_returns_metrics_for_known_region() {
    let app = app_with(scenario_store());
    let body = json!({"regions": ["us-east"], "threshold_ms": 150});

    let (status, response) = send(app, post_process(&body)).await;

    assert_eq!(status, StatusCode::OK);
    let entry = &response["regions"][0];
    assert_eq!(entry["region"], "us-east");
    let metrics = &entry["report"]["metrics"];
    assert_eq!(metrics["avg_latency"], json!(150.0));
    assert_eq!(metrics["p95_latency"], json!(195.0));
    assert_eq!(metrics["avg_uptime"], json!(99.7));
    assert_eq!(metrics["breaches"], json!(1));
}

#[tokio::test]
async fn process_marks_unknown_region_as_no_data() {
    let app = app_with(scenario_store());
    let body = json!({"regions": ["eu-west"], "threshold_ms": 150});

    let (status, response) = send(app, post_process(&body)).await;

    assert_eq!(status, StatusCode::OK);
    let entry = &response["regions"][0];
    assert_eq!(entry["region"], "eu-west");
    assert_eq!(entry["report"], json!("no_data"));
}

#[tokio::test]
async fn process_preserves_request_order_and_duplicates() {
    let app = app_with(scenario_store());
    let body = json!({"regions": ["eu-west", "us-east", "us-east"], "threshold_ms": 150});

    let (status, response) = send(app, post_process(&body)).await;

    assert_eq!(status, StatusCode::OK);
    let entries = response["regions"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["region"], "eu-west");
    assert_eq!(entries[1]["region"], "us-east");
    assert_eq!(entries[2]["region"], "us-east");
    assert_eq!(entries[1], entries[2]);
}

#[tokio::test]
async fn empty_store_yields_service_unavailable() {
    let app = app_with(Vec::new());
    let body = json!({"regions": ["us-east"], "threshold_ms": 150});

    let (status, response) = send(app, post_process(&body)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response["error"], "telemetry data not available");
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_core() {
    let app = app_with(scenario_store());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/telemetry/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"regions\": 42}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn health_reports_dataset_summary() {
    let app = app_with(scenario_store());

    let (status, response) = send(app, get("/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["records"], json!(2));
    assert_eq!(response["regions"], json!(1));
    assert_eq!(response["data_available"], json!(true));
}

#[tokio::test]
async fn health_degrades_without_data() {
    let app = app_with(Vec::new());

    let (status, response) = send(app, get("/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "degraded");
    assert_eq!(response["data_available"], json!(false));
}

#[tokio::test]
async fn regions_inventory_is_sorted_with_counts() {
    let mut records = scenario_store();
    records.push(record("ap-south", 55.0, 98.0));
    let app = app_with(records);

    let (status, response) = send(app, get("/v1/regions")).await;

    assert_eq!(status, StatusCode::OK);
    let regions = response["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0]["region"], "ap-south");
    assert_eq!(regions[0]["records"], json!(1));
    assert_eq!(regions[1]["region"], "us-east");
    assert_eq!(regions[1]["records"], json!(2));
}
