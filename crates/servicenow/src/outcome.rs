//! Outcome of a single forwarding attempt.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of one best-effort delivery to ServiceNow.
///
/// Forwarding never raises: transport faults, rejections, and parse failures
/// are all folded into one of these variants.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ForwardOutcome {
    /// ServiceNow accepted the record (HTTP 200 or 201).
    Delivered {
        /// `sys_id` of the created record, empty when absent from the response
        record_id: String,
        /// When this outcome was generated
        timestamp: DateTime<Utc>,
    },

    /// ServiceNow answered with a non-success status.
    Rejected {
        /// HTTP status code returned by ServiceNow
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request never completed (connection failure, timeout, bad body).
    Failed {
        /// Underlying error message
        message: String,
    },
}

impl ForwardOutcome {
    /// Whether the record reached ServiceNow.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Human-readable failure description; `None` for delivered outcomes.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Self::Delivered { .. } => None,
            Self::Rejected { status, .. } => Some(format!("ServiceNow error: {status}")),
            Self::Failed { message } => Some(message.clone()),
        }
    }
}
