//! Crowd-safety alert relay.
//!
//! Receives emergency alerts over HTTP and forwards them, reformatted, to
//! ServiceNow. Each request is stateless and independent; delivery is a
//! single best-effort attempt with no retry or queuing.

pub mod hospitals;
pub mod server;
