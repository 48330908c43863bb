use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission, created exclusively by the submission
/// pipeline and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
