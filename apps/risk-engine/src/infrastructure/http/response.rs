//! HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::assessment::RiskAssessment;

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Server time of the check.
    pub timestamp: DateTime<Utc>,
}

/// Envelope returned by both evaluation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResponse {
    /// The computed assessment.
    pub assessment: RiskAssessment,
    /// Server time of the response.
    pub timestamp: DateTime<Utc>,
    /// Wall-clock evaluation time in seconds.
    pub processing_time: f64,
}
