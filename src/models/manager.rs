//! Manager model: the owner/organizer of an RDQ.

use serde::{Deserialize, Serialize};

/// A manager who owns RDQs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: String,
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: String,
}

/// Request body for creating a new manager.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagerRequest {
    pub nom: String,
    #[serde(default)]
    pub email: Option<String>,
}
