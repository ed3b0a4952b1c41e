//! API DTOs (Data Transfer Objects)

use serde::Serialize;

/// Response for GET /api/session/status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub role: Option<String>,
}
