//! ServiceNow table API client for crowd-safety alert forwarding.
//!
//! This crate owns the single outbound call of the alert relay: one
//! authenticated POST per alert against a configured ServiceNow table,
//! with the response folded into a structured outcome.
//!
//! # Usage
//!
//! ```no_run
//! use servicenow::{Alert, ServiceNowClient, ServiceNowConfig};
//!
//! # async fn demo() {
//! // Load configuration once at startup
//! let client = ServiceNowClient::new(ServiceNowConfig::from_env())
//!     .expect("failed to build HTTP client");
//!
//! // Forward an alert; this never returns an error, only an outcome
//! let alert = Alert::new("3 seconds", "CRITICAL RISK", "40.7128,-74.0060");
//! let outcome = client.forward(&alert).await;
//!
//! if outcome.is_delivered() {
//!     println!("record created");
//! }
//! # }
//! ```
//!
//! # Configuration
//!
//! [`ServiceNowConfig::from_env`] reads the following environment variables:
//!
//! - `SERVICENOW_URL`: full URL of the table API endpoint
//! - `SERVICENOW_USER`: integration user for basic auth
//! - `SERVICENOW_PASSWORD`: integration password for basic auth
//!
//! The compiled-in defaults point at a demo instance and must be overridden
//! in any real deployment.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod client;
pub mod config;
pub mod error;
pub mod outcome;

pub use alert::Alert;
pub use client::ServiceNowClient;
pub use config::ServiceNowConfig;
pub use error::ForwardError;
pub use outcome::ForwardOutcome;
