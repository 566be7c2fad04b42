//! Collaborateur model: an attendee assigned to RDQs.

use serde::{Deserialize, Serialize};

/// A collaborator who attends RDQs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborateur {
    pub id: String,
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: String,
}

/// Request body for creating a new collaborateur.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollaborateurRequest {
    pub nom: String,
    #[serde(default)]
    pub email: Option<String>,
}
