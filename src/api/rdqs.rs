//! RDQ API endpoints: CRUD plus document and bilan attachment.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    Bilan, CreateBilanRequest, CreateDocumentRequest, CreateRdqRequest, Document, Rdq, RdqSummary,
    UpdateRdqRequest, NOTE_MAX, NOTE_MIN,
};
use crate::AppState;

/// Maximum accepted length for an RDQ title.
const TITRE_MAX_LEN: usize = 255;
/// Maximum accepted length for an RDQ address.
const ADRESSE_MAX_LEN: usize = 500;

/// POST /api/rdqs - Create a new RDQ.
pub async fn create_rdq(
    State(state): State<AppState>,
    Json(mut request): Json<CreateRdqRequest>,
) -> ApiResult<Rdq> {
    if request.titre.trim().is_empty() {
        return Err(AppError::Validation("titre is required".to_string()));
    }
    if request.titre.len() > TITRE_MAX_LEN {
        return Err(AppError::Validation(format!(
            "titre must be at most {} characters",
            TITRE_MAX_LEN
        )));
    }
    if let Some(adresse) = &request.adresse {
        if adresse.len() > ADRESSE_MAX_LEN {
            return Err(AppError::Validation(format!(
                "adresse must be at most {} characters",
                ADRESSE_MAX_LEN
            )));
        }
    }

    let date_heure = DateTime::parse_from_rfc3339(&request.date_heure).map_err(|_| {
        AppError::Validation("dateHeure is not a valid RFC 3339 timestamp".to_string())
    })?;
    if date_heure.with_timezone(&Utc) <= Utc::now() {
        return Err(AppError::Validation(
            "dateHeure must be in the future".to_string(),
        ));
    }
    // Stored timestamps are UTC so date bounds and ordering compare
    // lexicographically regardless of the submitted offset.
    request.date_heure = date_heure.with_timezone(&Utc).to_rfc3339();

    if request.collaborateur_ids.is_empty() {
        return Err(AppError::Validation(
            "collaborateurIds must contain at least one collaborateur".to_string(),
        ));
    }

    // Reference checks: exactly one manager, one projet, existing attendees.
    if state.repo.get_manager(&request.manager_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Manager {} not found",
            request.manager_id
        )));
    }
    if state.repo.get_projet(&request.projet_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Projet {} not found",
            request.projet_id
        )));
    }
    for collaborateur_id in &request.collaborateur_ids {
        if state
            .repo
            .get_collaborateur(collaborateur_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Collaborateur {} not found",
                collaborateur_id
            )));
        }
    }

    let rdq = state.repo.create_rdq(&request).await?;
    success(rdq)
}

/// GET /api/rdqs/:id - Get a single RDQ with its related summaries.
pub async fn get_rdq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<RdqSummary> {
    let summary = state
        .repo
        .get_rdq_detail(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("RDQ {} not found", id)))?;
    success(summary)
}

/// PUT /api/rdqs/:id - Partially update an RDQ.
pub async fn update_rdq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut request): Json<UpdateRdqRequest>,
) -> ApiResult<Rdq> {
    if let Some(titre) = &request.titre {
        if titre.trim().is_empty() {
            return Err(AppError::Validation("titre must not be blank".to_string()));
        }
        if titre.len() > TITRE_MAX_LEN {
            return Err(AppError::Validation(format!(
                "titre must be at most {} characters",
                TITRE_MAX_LEN
            )));
        }
    }
    if let Some(adresse) = &request.adresse {
        if adresse.len() > ADRESSE_MAX_LEN {
            return Err(AppError::Validation(format!(
                "adresse must be at most {} characters",
                ADRESSE_MAX_LEN
            )));
        }
    }
    // Future-date is a creation-time invariant only; updates may adjust the
    // date of an already-started meeting.
    if let Some(date_heure) = &request.date_heure {
        let parsed = DateTime::parse_from_rfc3339(date_heure).map_err(|_| {
            AppError::Validation("dateHeure is not a valid RFC 3339 timestamp".to_string())
        })?;
        request.date_heure = Some(parsed.with_timezone(&Utc).to_rfc3339());
    }
    if let Some(collaborateur_ids) = &request.collaborateur_ids {
        if collaborateur_ids.is_empty() {
            return Err(AppError::Validation(
                "collaborateurIds must contain at least one collaborateur".to_string(),
            ));
        }
        for collaborateur_id in collaborateur_ids {
            if state
                .repo
                .get_collaborateur(collaborateur_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!(
                    "Collaborateur {} not found",
                    collaborateur_id
                )));
            }
        }
    }

    let rdq = state.repo.update_rdq(&id, &request).await?;
    success(rdq)
}

/// DELETE /api/rdqs/:id - Delete an RDQ.
pub async fn delete_rdq(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_rdq(&id).await?;
    success(())
}

/// POST /api/rdqs/:id/bilans - Attach a bilan to an RDQ.
pub async fn add_bilan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateBilanRequest>,
) -> ApiResult<Bilan> {
    if !(NOTE_MIN..=NOTE_MAX).contains(&request.note) {
        return Err(AppError::Validation(format!(
            "note must be between {} and {}",
            NOTE_MIN, NOTE_MAX
        )));
    }
    if request.auteur.trim().is_empty() {
        return Err(AppError::Validation("auteur is required".to_string()));
    }
    if state.repo.get_rdq(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("RDQ {} not found", id)));
    }

    let bilan = state.repo.add_bilan(&id, &request).await?;
    success(bilan)
}

/// POST /api/rdqs/:id/documents - Attach a document to an RDQ.
pub async fn add_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateDocumentRequest>,
) -> ApiResult<Document> {
    if request.nom.trim().is_empty() {
        return Err(AppError::Validation("nom is required".to_string()));
    }
    if state.repo.get_rdq(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("RDQ {} not found", id)));
    }

    let document = state.repo.add_document(&id, &request).await?;
    success(document)
}
