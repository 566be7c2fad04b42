//! Bilan model: a post-meeting evaluation of an RDQ.

use serde::{Deserialize, Serialize};

/// Lowest and highest accepted evaluation score.
pub const NOTE_MIN: i64 = 1;
pub const NOTE_MAX: i64 = 5;

/// A post-meeting rating/comment authored by the manager or a collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bilan {
    pub id: String,
    pub rdq_id: String,
    pub note: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    pub auteur: String,
    pub created_at: String,
}

/// Request body for attaching a bilan to an RDQ.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBilanRequest {
    pub note: i64,
    #[serde(default)]
    pub commentaire: Option<String>,
    pub auteur: String,
}
