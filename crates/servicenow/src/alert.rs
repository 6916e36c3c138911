//! Alert value object received from detection clients.

use serde::{Deserialize, Serialize};

fn default_unknown() -> String {
    "Unknown".to_string()
}

fn default_status() -> String {
    "CRITICAL RISK".to_string()
}

/// A single crowd-safety alert.
///
/// Constructed from inbound JSON and discarded after one forwarding attempt.
/// Missing fields take the documented defaults at deserialization time, so
/// the outbound payload always carries all three columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// How long the critical event lasted (e.g. "3 seconds")
    #[serde(default = "default_unknown")]
    pub timeframe: String,

    /// Severity label (e.g. "CRITICAL RISK", "HIGH DENSITY WARNING")
    #[serde(default = "default_status")]
    pub status: String,

    /// Location coordinates or address (e.g. "40.7128,-74.0060")
    #[serde(default = "default_unknown")]
    pub location: String,
}

impl Alert {
    /// Create an alert with explicit fields.
    #[must_use]
    pub fn new(
        timeframe: impl Into<String>,
        status: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            timeframe: timeframe.into(),
            status: status.into(),
            location: location.into(),
        }
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            timeframe: default_unknown(),
            status: default_status(),
            location: default_unknown(),
        }
    }
}
