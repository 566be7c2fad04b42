//! Collaborateur API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Collaborateur, CreateCollaborateurRequest};
use crate::AppState;

/// GET /api/collaborateurs - List all collaborateurs.
pub async fn list_collaborateurs(State(state): State<AppState>) -> ApiResult<Vec<Collaborateur>> {
    let collaborateurs = state.repo.list_collaborateurs().await?;
    success(collaborateurs)
}

/// GET /api/collaborateurs/:id - Get a single collaborateur.
pub async fn get_collaborateur(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Collaborateur> {
    let collaborateur = state
        .repo
        .get_collaborateur(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Collaborateur {} not found", id)))?;
    success(collaborateur)
}

/// POST /api/collaborateurs - Create a new collaborateur.
pub async fn create_collaborateur(
    State(state): State<AppState>,
    Json(request): Json<CreateCollaborateurRequest>,
) -> ApiResult<Collaborateur> {
    if request.nom.trim().is_empty() {
        return Err(AppError::Validation("nom is required".to_string()));
    }

    let collaborateur = state.repo.create_collaborateur(&request).await?;
    success(collaborateur)
}
