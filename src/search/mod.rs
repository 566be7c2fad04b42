//! Dynamic RDQ search: criteria validation, predicate compilation, scoped
//! query execution and result assembly.
//!
//! The orchestrator is the single entry point. It takes the caller context
//! explicitly so scoping stays pure and testable, with no implicit
//! security state.

mod criteria;
mod envelope;
mod predicate;

pub use criteria::*;
pub use envelope::*;
pub use predicate::*;

use crate::auth::{CallerContext, CallerRole};
use crate::db::Repository;
use crate::errors::AppError;

/// Execute a search: resolve scoping, compile the predicate, run the paged
/// content query and the aggregate queries, and assemble the envelope.
///
/// Read-only. The content, count and stats queries run sequentially on the
/// same pool; a write landing between them can skew the stats by a row.
pub async fn execute_search(
    repo: &Repository,
    caller: &CallerContext,
    criteria: RdqSearchCriteria,
) -> Result<RdqSearchPage, AppError> {
    let criteria = resolve_scope(repo, caller, criteria).await?;
    let conditions = build_conditions(&criteria);

    tracing::debug!(
        filters = criteria.has_filters(),
        page = criteria.page,
        size = criteria.size,
        "executing rdq search"
    );

    let total_elements = repo.count_rdqs(&conditions).await?;
    let hits = repo
        .search_rdqs(
            &conditions,
            criteria.sort_by,
            criteria.sort_direction,
            criteria.size,
            criteria.offset(),
        )
        .await?;
    let stats = repo.search_stats(&conditions).await?;

    let mut content = Vec::with_capacity(hits.len());
    for hit in hits {
        let collaborateurs = repo.collaborateurs_for_rdq(&hit.id).await?;
        let documents = if criteria.include_documents {
            Some(repo.documents_for_rdq(&hit.id).await?)
        } else {
            None
        };
        let bilans = if criteria.include_bilans {
            Some(repo.bilans_for_rdq(&hit.id).await?)
        } else {
            None
        };
        content.push(hit.into_summary(collaborateurs, documents, bilans));
    }

    Ok(RdqSearchPage::assemble(
        content,
        total_elements,
        stats,
        criteria,
    ))
}

/// Force the "my" flags to the caller's own linked identity.
///
/// A manager asking for `myRdqsOnly` gets their own manager id regardless
/// of what the request supplied, so the flag cannot be used to read
/// another manager's RDQs. Same rule for collaborateurs and
/// `myAssignmentsOnly`. The linked profile must exist.
async fn resolve_scope(
    repo: &Repository,
    caller: &CallerContext,
    mut criteria: RdqSearchCriteria,
) -> Result<RdqSearchCriteria, AppError> {
    if criteria.my_rdqs_only && caller.role == CallerRole::Manager {
        let manager_id = caller.manager_id.clone().ok_or_else(|| {
            AppError::NotFound("Caller has no linked manager profile".to_string())
        })?;
        if repo.get_manager(&manager_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Manager {} not found",
                manager_id
            )));
        }
        criteria.manager_id = Some(manager_id);
    }

    if criteria.my_assignments_only && caller.role == CallerRole::Collaborateur {
        let collaborateur_id = caller.collaborateur_id.clone().ok_or_else(|| {
            AppError::NotFound("Caller has no linked collaborateur profile".to_string())
        })?;
        if repo.get_collaborateur(&collaborateur_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Collaborateur {} not found",
                collaborateur_id
            )));
        }
        criteria.collaborateur_id = Some(collaborateur_id);
    }

    Ok(criteria)
}
