use serde::{Deserialize, Serialize};
use crate::models::domain::TeamBuildReport;

/// Response for the build teams endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BuildTeamsResponse {
    #[serde(rename = "buildId")]
    pub build_id: String,
    #[serde(flatten)]
    pub report: TeamBuildReport,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
