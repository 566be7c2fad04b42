//! Client and Projet models. A projet belongs to exactly one client.

use serde::{Deserialize, Serialize};

/// A client company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub nom: String,
    pub created_at: String,
}

/// Request body for creating a new client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub nom: String,
}

/// A unit of client work that RDQs are attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projet {
    pub id: String,
    pub nom: String,
    pub client_id: String,
    pub created_at: String,
}

/// Request body for creating a new projet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjetRequest {
    pub nom: String,
    pub client_id: String,
}
