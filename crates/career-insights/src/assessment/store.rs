use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentResults, Locale};

/// Identifier wrapper for saved assessment profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

/// Profile payload handed to the external persistence API after scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub profile_id: ProfileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    pub locale: Locale,
    pub submitted_at: DateTime<Utc>,
    pub results: AssessmentResults,
}

/// Outbound persistence hook (profile API, database, queue).
pub trait ProfileStore: Send + Sync {
    fn save(&self, record: ProfileRecord) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile already exists")]
    Conflict,
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
