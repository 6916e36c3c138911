//! Integration tests for the alert intake server.
//!
//! Each test binds the router on an ephemeral port and drives it with a real
//! HTTP client, with ServiceNow standing in as a wiremock instance.

use std::sync::Arc;

use relay::server::{build_router, ServerState};
use serde_json::{json, Value};
use servicenow::{ServiceNowClient, ServiceNowConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TABLE_PATH: &str = "/api/now/table/u_stampede_data";

fn test_config(table_url: String) -> ServiceNowConfig {
    ServiceNowConfig {
        table_url,
        username: "relay.test".to_string(),
        password: "relay-pass".to_string(),
        timeout_secs: 2,
    }
}

/// Bind the relay on an ephemeral port and return its base URL.
async fn spawn_relay(config: ServiceNowConfig) -> String {
    let forwarder = ServiceNowClient::new(config).expect("client should build");
    let state = Arc::new(ServerState::new(forwarder));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind ephemeral port");
    let addr = listener.local_addr().expect("should read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_health_is_always_ok() {
    // Point the forwarder somewhere unreachable; health must not care
    let base = spawn_relay(test_config("http://127.0.0.1:1/api/now/table/x".to_string())).await;

    let response = reqwest::get(format!("{base}/api/health"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "relay");
}

#[tokio::test]
async fn test_forwards_alert_end_to_end() {
    let snow = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(body_json(json!({
            "u_stampede_data": "CRITICAL RISK",
            "u_timeframe": "3 seconds",
            "u_location": "40.7128,-74.0060",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"result": {"sys_id": "X1"}})))
        .expect(1)
        .mount(&snow)
        .await;

    let base = spawn_relay(test_config(format!("{}{TABLE_PATH}", snow.uri()))).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-alert"))
        .json(&json!({
            "timeframe": "3 seconds",
            "status": "CRITICAL RISK",
            "location": "40.7128,-74.0060",
        }))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["record_id"], "X1");
    assert_eq!(body["message"], "Alert posted to ServiceNow");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_applies_defaults_for_empty_body() {
    let snow = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(body_json(json!({
            "u_stampede_data": "CRITICAL RISK",
            "u_timeframe": "Unknown",
            "u_location": "Unknown",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"result": {"sys_id": "d1"}})))
        .expect(1)
        .mount(&snow)
        .await;

    let base = spawn_relay(test_config(format!("{}{TABLE_PATH}", snow.uri()))).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-alert"))
        .json(&json!({}))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["record_id"], "d1");
}

#[tokio::test]
async fn test_remote_rejection_maps_to_500() {
    let snow = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&snow)
        .await;

    let base = spawn_relay(test_config(format!("{}{TABLE_PATH}", snow.uri()))).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-alert"))
        .json(&json!({"timeframe": "3 seconds"}))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "ServiceNow error: 503");
}

#[tokio::test]
async fn test_transport_failure_maps_to_500() {
    let base = spawn_relay(test_config("http://127.0.0.1:1/api/now/table/x".to_string())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-alert"))
        .json(&json!({}))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_malformed_body_maps_to_400() {
    let base = spawn_relay(test_config("http://127.0.0.1:1/api/now/table/x".to_string())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-alert"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_missing_content_type_maps_to_400() {
    let base = spawn_relay(test_config("http://127.0.0.1:1/api/now/table/x".to_string())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/send-alert"))
        .body(r#"{"timeframe":"3 seconds"}"#)
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("body should be JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_hospital_roster_is_served() {
    let base = spawn_relay(test_config("http://127.0.0.1:1/api/now/table/x".to_string())).await;

    let response = reqwest::get(format!("{base}/api/hospitals"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("body should be JSON");
    let roster = body.as_array().expect("roster should be an array");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0]["name"], "Emergency Medical Center");
    assert!(roster[0]["email"].as_str().is_some_and(|e| e.contains('@')));
}
