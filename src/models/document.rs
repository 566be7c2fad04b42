//! Document model: a file reference attached to an RDQ.
//!
//! Only the metadata lives here; the file body is held by the external
//! storage integration.

use serde::{Deserialize, Serialize};

/// A document attached to an RDQ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub rdq_id: String,
    pub nom: String,
    pub created_at: String,
}

/// Request body for attaching a document to an RDQ.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub nom: String,
}
