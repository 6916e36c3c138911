//! Fallback hospital contacts.
//!
//! Static roster served when no nearby hospital can be resolved for an
//! incident location. Deliberately disconnected from the alert forwarding
//! path; notification fanout is a separate feature and is not implemented
//! here.

use serde::Serialize;

/// A hospital contact with coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct Hospital {
    /// Display name
    pub name: &'static str,
    /// Contact address for incident notifications
    pub email: &'static str,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// The fallback roster.
#[must_use]
pub fn fallback_roster() -> Vec<Hospital> {
    vec![
        Hospital {
            name: "Emergency Medical Center",
            email: "emergency@hospital.com",
            lat: 40.7128,
            lon: -74.0060,
        },
        Hospital {
            name: "City General Hospital",
            email: "general@hospital.com",
            lat: 40.7580,
            lon: -73.9855,
        },
    ]
}
