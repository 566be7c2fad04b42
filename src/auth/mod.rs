//! PSK-based authentication and caller identity extraction.
//!
//! The PSK check uses constant-time comparison to mitigate timing attacks.
//! The caller principal (role plus linked manager/collaborateur id) is
//! issued by the upstream auth layer and forwarded as request headers.

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::errors::{codes, AppError, ErrorDetails, ErrorResponse};

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the caller's role (MANAGER, COLLABORATEUR, ADMIN).
pub const ROLE_HEADER: &str = "x-rdq-role";
/// Header carrying the caller's linked manager id, when the role is MANAGER.
pub const MANAGER_ID_HEADER: &str = "x-rdq-manager-id";
/// Header carrying the caller's linked collaborateur id, when the role is COLLABORATEUR.
pub const COLLABORATEUR_ID_HEADER: &str = "x-rdq-collaborateur-id";

/// Role claim of the authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerRole {
    Manager,
    Collaborateur,
    Admin,
}

impl CallerRole {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MANAGER" => Some(CallerRole::Manager),
            "COLLABORATEUR" => Some(CallerRole::Collaborateur),
            "ADMIN" => Some(CallerRole::Admin),
            _ => None,
        }
    }
}

/// The acting principal for a request.
#[derive(Debug, Clone)]
pub struct CallerContext {
    pub role: CallerRole,
    pub manager_id: Option<String>,
    pub collaborateur_id: Option<String>,
}

impl CallerContext {
    /// Build the caller context from the identity headers set by the
    /// upstream auth layer. A missing role header means an anonymous
    /// caller, which search scoping treats like an admin-free principal.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let role = match headers.get(ROLE_HEADER).and_then(|v| v.to_str().ok()) {
            Some(raw) => CallerRole::from_str(raw).ok_or_else(|| {
                AppError::Unauthorized(format!("Unknown role '{}' in {}", raw, ROLE_HEADER))
            })?,
            None => CallerRole::Admin,
        };

        let manager_id = headers
            .get(MANAGER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let collaborateur_id = headers
            .get(COLLABORATEUR_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        Ok(Self {
            role,
            manager_id,
            collaborateur_id,
        })
    }
}

/// PSK authentication layer function that takes the expected PSK as a parameter.
pub async fn psk_auth_layer(
    expected_psk: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // If no PSK is configured, allow all requests (dev mode)
    let Some(expected) = expected_psk else {
        return next.run(request).await;
    };

    // Get the API key from the request header
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    match provided {
        Some(provided_key) => {
            // Constant-time comparison to prevent timing attacks
            if constant_time_compare(&provided_key, &expected) {
                next.run(request).await
            } else {
                unauthorized_response("Invalid API key")
            }
        }
        None => {
            // Also check Authorization header as bearer token
            let bearer = request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .map(|s| s.to_string());

            match bearer {
                Some(bearer_key) if constant_time_compare(&bearer_key, &expected) => {
                    next.run(request).await
                }
                _ => unauthorized_response("Missing or invalid API key"),
            }
        }
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
            details: None,
        },
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-key"));
    }

    #[test]
    fn caller_context_reads_identity_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("MANAGER"));
        headers.insert(MANAGER_ID_HEADER, HeaderValue::from_static("mgr-1"));

        let caller = CallerContext::from_headers(&headers).unwrap();
        assert_eq!(caller.role, CallerRole::Manager);
        assert_eq!(caller.manager_id.as_deref(), Some("mgr-1"));
        assert!(caller.collaborateur_id.is_none());
    }

    #[test]
    fn caller_context_rejects_unknown_role() {
        let mut headers = HeaderMap::new();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("SUPERUSER"));

        assert!(CallerContext::from_headers(&headers).is_err());
    }
}
