use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenericResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl GenericResponse {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: String,
}

impl HealthResponse {
    /// Always reports healthy; no dependency is probed.
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
