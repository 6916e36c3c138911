//! ServiceNow table API client.
//!
//! One authenticated POST per alert, bounded by a timeout, no retry. The
//! response is interpreted into a [`ForwardOutcome`]; callers never see an
//! error from the forwarding path.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alert::Alert;
use crate::config::ServiceNowConfig;
use crate::error::ForwardError;
use crate::outcome::ForwardOutcome;

/// Client for posting alert records to a ServiceNow table.
#[derive(Clone)]
pub struct ServiceNowClient {
    client: Client,
    config: ServiceNowConfig,
}

impl ServiceNowClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ServiceNowConfig) -> Result<Self, ForwardError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Forward one alert to ServiceNow.
    ///
    /// Always returns an outcome: transport faults and parse failures become
    /// [`ForwardOutcome::Failed`], non-2xx answers become
    /// [`ForwardOutcome::Rejected`]. No side effect beyond the one POST.
    pub async fn forward(&self, alert: &Alert) -> ForwardOutcome {
        match self.try_forward(alert).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Forwarding attempt failed");
                ForwardOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn try_forward(&self, alert: &Alert) -> Result<ForwardOutcome, ForwardError> {
        let payload = RecordPayload {
            u_stampede_data: &alert.status,
            u_timeframe: &alert.timeframe,
            u_location: &alert.location,
        };

        debug!(url = %self.config.table_url, "POST alert record");

        let response = self
            .client
            .post(&self.config.table_url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            let envelope: RecordEnvelope = response.json().await?;
            let record_id = envelope.result.and_then(|r| r.sys_id).unwrap_or_default();

            debug!(record_id = %record_id, "Record accepted");

            Ok(ForwardOutcome::Delivered {
                record_id,
                timestamp: Utc::now(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();

            warn!(status = %status, body = %body, "ServiceNow rejected the record");

            Ok(ForwardOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

// =============================================================================
// ServiceNow API types
// =============================================================================

/// Outbound table record. Field names are the table columns.
#[derive(Debug, Serialize)]
struct RecordPayload<'a> {
    u_stampede_data: &'a str,
    u_timeframe: &'a str,
    u_location: &'a str,
}

/// `{"result": {"sys_id": "..."}}` envelope returned by the table API.
#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    #[serde(default)]
    result: Option<RecordResult>,
}

#[derive(Debug, Deserialize)]
struct RecordResult {
    #[serde(default)]
    sys_id: Option<String>,
}
