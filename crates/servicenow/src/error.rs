//! Error types for the forwarding client.

use thiserror::Error;

/// Errors internal to the forwarding client.
///
/// These never cross the [`forward`](crate::ServiceNowClient::forward)
/// boundary; they are folded into
/// [`ForwardOutcome::Failed`](crate::ForwardOutcome) there.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// HTTP request failed or the response body could not be parsed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
