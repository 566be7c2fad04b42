//! Manager API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateManagerRequest, Manager};
use crate::AppState;

/// GET /api/managers - List all managers.
pub async fn list_managers(State(state): State<AppState>) -> ApiResult<Vec<Manager>> {
    let managers = state.repo.list_managers().await?;
    success(managers)
}

/// GET /api/managers/:id - Get a single manager.
pub async fn get_manager(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Manager> {
    let manager = state
        .repo
        .get_manager(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Manager {} not found", id)))?;
    success(manager)
}

/// POST /api/managers - Create a new manager.
pub async fn create_manager(
    State(state): State<AppState>,
    Json(request): Json<CreateManagerRequest>,
) -> ApiResult<Manager> {
    if request.nom.trim().is_empty() {
        return Err(AppError::Validation("nom is required".to_string()));
    }

    let manager = state.repo.create_manager(&request).await?;
    success(manager)
}
