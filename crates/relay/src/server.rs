//! HTTP server for alert intake.
//!
//! Provides REST API endpoints for:
//! - Receiving crowd-safety alerts and forwarding them to ServiceNow
//! - Health checks
//! - The fallback hospital roster

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use servicenow::{Alert, ForwardOutcome, ServiceNowClient};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::hospitals;

/// Server state shared across handlers.
pub struct ServerState {
    /// ServiceNow forwarding client
    pub forwarder: ServiceNowClient,
}

impl ServerState {
    /// Create a new server state.
    #[must_use]
    pub fn new(forwarder: ServiceNowClient) -> Self {
        Self { forwarder }
    }
}

/// Build the HTTP router.
pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/send-alert", post(send_alert_handler))
        .route("/api/health", get(health_handler))
        .route("/api/hospitals", get(hospitals_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the address.
pub async fn run_server(state: Arc<ServerState>, addr: &str) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Alert relay listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Request/Response types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Response for a delivered alert.
#[derive(Debug, Serialize)]
struct AlertResponse {
    success: bool,
    message: String,
    record_id: String,
    timestamp: DateTime<Utc>,
}

/// Response for a failed or malformed alert.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Alert intake handler - main entry point.
///
/// Malformed bodies are answered with 400 before the forwarder is invoked;
/// forwarding failures map to 500. The process never dies on a failed
/// attempt.
async fn send_alert_handler(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<Alert>, JsonRejection>,
) -> Response {
    let Json(alert) = match body {
        Ok(json) => json,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected malformed alert request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    success: false,
                    message: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    info!(
        status = %alert.status,
        timeframe = %alert.timeframe,
        location = %alert.location,
        "Received alert"
    );

    match state.forwarder.forward(&alert).await {
        ForwardOutcome::Delivered {
            record_id,
            timestamp,
        } => (
            StatusCode::OK,
            Json(AlertResponse {
                success: true,
                message: "Alert posted to ServiceNow".to_string(),
                record_id,
                timestamp,
            }),
        )
            .into_response(),
        outcome => {
            let message = outcome.failure_message().unwrap_or_default();
            error!(message = %message, "Alert forwarding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    message,
                }),
            )
                .into_response()
        }
    }
}

/// Health check handler.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
    })
}

/// Fallback hospital roster handler.
async fn hospitals_handler() -> impl IntoResponse {
    Json(hospitals::fallback_roster())
}
