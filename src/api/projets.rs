//! Client and projet API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Client, CreateClientRequest, CreateProjetRequest, Projet};
use crate::AppState;

/// GET /api/clients - List all clients.
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Vec<Client>> {
    let clients = state.repo.list_clients().await?;
    success(clients)
}

/// POST /api/clients - Create a new client.
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> ApiResult<Client> {
    if request.nom.trim().is_empty() {
        return Err(AppError::Validation("nom is required".to_string()));
    }

    let client = state.repo.create_client(&request).await?;
    success(client)
}

/// GET /api/projets - List all projets.
pub async fn list_projets(State(state): State<AppState>) -> ApiResult<Vec<Projet>> {
    let projets = state.repo.list_projets().await?;
    success(projets)
}

/// GET /api/projets/:id - Get a single projet.
pub async fn get_projet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Projet> {
    let projet = state
        .repo
        .get_projet(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Projet {} not found", id)))?;
    success(projet)
}

/// POST /api/projets - Create a new projet.
pub async fn create_projet(
    State(state): State<AppState>,
    Json(request): Json<CreateProjetRequest>,
) -> ApiResult<Projet> {
    if request.nom.trim().is_empty() {
        return Err(AppError::Validation("nom is required".to_string()));
    }
    if state.repo.get_client(&request.client_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Client {} not found",
            request.client_id
        )));
    }

    let projet = state.repo.create_projet(&request).await?;
    success(projet)
}
