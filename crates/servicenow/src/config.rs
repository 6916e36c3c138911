//! Process configuration for the ServiceNow integration.
//!
//! Loaded once at startup and injected into the client constructor; nothing
//! reads these environment variables after that point.

/// Environment variable for the table API URL.
const ENV_SERVICENOW_URL: &str = "SERVICENOW_URL";

/// Environment variable for the integration user.
const ENV_SERVICENOW_USER: &str = "SERVICENOW_USER";

/// Environment variable for the integration password.
const ENV_SERVICENOW_PASSWORD: &str = "SERVICENOW_PASSWORD";

/// Default table URL (demo instance placeholder).
const DEFAULT_TABLE_URL: &str =
    "https://dev00000.service-now.com/api/now/table/u_stampede_data";

/// Default integration user (placeholder).
const DEFAULT_USERNAME: &str = "integration.user";

/// Default integration password (placeholder).
const DEFAULT_PASSWORD: &str = "change-me";

/// Default timeout for the outbound request, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the ServiceNow table API client.
#[derive(Clone)]
pub struct ServiceNowConfig {
    /// Full URL of the table API endpoint
    pub table_url: String,
    /// Integration user for basic auth
    pub username: String,
    /// Integration password for basic auth
    pub password: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ServiceNowConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to demo-instance placeholders that must be
    /// overridden in any real deployment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            table_url: std::env::var(ENV_SERVICENOW_URL)
                .unwrap_or_else(|_| DEFAULT_TABLE_URL.to_string()),
            username: std::env::var(ENV_SERVICENOW_USER)
                .unwrap_or_else(|_| DEFAULT_USERNAME.to_string()),
            password: std::env::var(ENV_SERVICENOW_PASSWORD)
                .unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
