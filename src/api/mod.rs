//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.
//! Errors propagate as `AppError` and are rendered by its `IntoResponse`
//! implementation; handlers never swallow a failure into an empty result.

mod collaborateurs;
mod managers;
mod projets;
mod rdqs;
mod search;

pub use collaborateurs::*;
pub use managers::*;
pub use projets::*;
pub use rdqs::*;
pub use search::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}
