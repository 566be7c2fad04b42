//! Search API endpoint.

use axum::extract::{Query, State};
use axum::http::HeaderMap;

use super::{success, ApiResult};
use crate::auth::CallerContext;
use crate::search::{self, RdqSearchCriteria, RdqSearchPage, RdqSearchParams};
use crate::AppState;

/// GET /api/rdqs/search - Dynamic RDQ search.
///
/// Validates the raw query parameters into criteria, resolves the caller
/// identity from the auth headers, and delegates to the search
/// orchestrator.
pub async fn search_rdqs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<RdqSearchParams>,
) -> ApiResult<RdqSearchPage> {
    let caller = CallerContext::from_headers(&headers)?;
    let criteria = RdqSearchCriteria::from_params(params)?;

    let page = search::execute_search(&state.repo, &caller, criteria).await?;
    success(page)
}
