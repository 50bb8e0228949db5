use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- Rota --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRotaRequest {
    pub name: String,
    pub duties: Vec<String>,
    /// Assignment date as an RFC 3339 timestamp or a plain `YYYY-MM-DD` day.
    /// Anything unparseable falls back to the current time.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotaEntryResponse {
    /// Hex form of the store-assigned ObjectId.
    pub id: String,
    pub name: String,
    pub duties: Vec<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRotaResponse {
    pub message: String,
}

// -- Chores --

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomChoreResponse {
    pub chore: String,
}

// -- Errors --

/// Body shape shared by every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
