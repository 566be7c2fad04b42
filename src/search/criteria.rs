//! Search criteria: the caller-supplied filter/sort/page specification.
//!
//! Raw query-string parameters are parsed into a validated criteria value
//! before anything touches the database. Out-of-range or unparseable input
//! fails with a validation error naming the field; nothing is clamped,
//! since clamping would mask client bugs behind misleading pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{RdqMode, RdqStatut};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest accepted page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw query-string parameters for `GET /api/rdqs/search`.
///
/// Everything is optional; `statuts` and `modes` are comma-separated lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdqSearchParams {
    pub client_id: Option<String>,
    pub client_nom: Option<String>,
    pub collaborateur_id: Option<String>,
    pub collaborateur_nom: Option<String>,
    pub manager_id: Option<String>,
    pub projet_id: Option<String>,
    pub projet_nom: Option<String>,
    pub statuts: Option<String>,
    pub modes: Option<String>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
    pub search_term: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub include_history: Option<bool>,
    pub include_documents: Option<bool>,
    pub include_bilans: Option<bool>,
    pub my_rdqs_only: Option<bool>,
    pub my_assignments_only: Option<bool>,
}

/// Field an RDQ page can be sorted on.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    DateHeure,
    Titre,
    Statut,
    Mode,
}

impl SortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dateHeure" => Some(SortField::DateHeure),
            "titre" => Some(SortField::Titre),
            "statut" => Some(SortField::Statut),
            "mode" => Some(SortField::Mode),
            _ => None,
        }
    }

    /// Column the sort maps to. Only whitelisted fields reach the query,
    /// so this is never caller-controlled SQL.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::DateHeure => "r.date_heure",
            SortField::Titre => "r.titre",
            SortField::Statut => "r.statut",
            SortField::Mode => "r.mode",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("ASC") {
            Some(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Validated search criteria, constructed per request and never persisted.
///
/// The serialized form is echoed back in the response envelope
/// (`appliedCriteria`), after scoping has been resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdqSearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborateur_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborateur_nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projet_nom: Option<String>,
    pub statuts: Vec<RdqStatut>,
    pub modes: Vec<RdqMode>,
    /// Inclusive lower bound, normalized RFC 3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<String>,
    /// Inclusive upper bound, normalized RFC 3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    pub page: i64,
    pub size: i64,
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
    pub include_history: bool,
    pub include_documents: bool,
    pub include_bilans: bool,
    pub my_rdqs_only: bool,
    pub my_assignments_only: bool,
}

impl RdqSearchCriteria {
    /// Validate raw parameters into criteria.
    pub fn from_params(params: RdqSearchParams) -> Result<Self, AppError> {
        let page = params.page.unwrap_or(0);
        if page < 0 {
            return Err(AppError::Validation("page must be >= 0".to_string()));
        }

        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(AppError::Validation(format!(
                "size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        let statuts = parse_statuts(params.statuts.as_deref())?;
        let modes = parse_modes(params.modes.as_deref())?;

        let date_debut = parse_date(params.date_debut.as_deref(), "dateDebut")?;
        let date_fin = parse_date(params.date_fin.as_deref(), "dateFin")?;

        let sort_by = match params.sort_by.as_deref() {
            None => SortField::DateHeure,
            Some(raw) => SortField::from_str(raw).ok_or_else(|| {
                AppError::Validation(format!(
                    "sortBy '{}' is not sortable (expected dateHeure, titre, statut or mode)",
                    raw
                ))
            })?,
        };

        let sort_direction = match params.sort_direction.as_deref() {
            None => SortDirection::Desc,
            Some(raw) => SortDirection::from_str(raw).ok_or_else(|| {
                AppError::Validation(format!(
                    "sortDirection '{}' is not valid (expected ASC or DESC)",
                    raw
                ))
            })?,
        };

        Ok(Self {
            client_id: non_blank(params.client_id),
            client_nom: non_blank(params.client_nom),
            collaborateur_id: non_blank(params.collaborateur_id),
            collaborateur_nom: non_blank(params.collaborateur_nom),
            manager_id: non_blank(params.manager_id),
            projet_id: non_blank(params.projet_id),
            projet_nom: non_blank(params.projet_nom),
            statuts,
            modes,
            date_debut,
            date_fin,
            search_term: non_blank(params.search_term),
            page,
            size,
            sort_by,
            sort_direction,
            include_history: params.include_history.unwrap_or(false),
            include_documents: params.include_documents.unwrap_or(false),
            include_bilans: params.include_bilans.unwrap_or(false),
            my_rdqs_only: params.my_rdqs_only.unwrap_or(false),
            my_assignments_only: params.my_assignments_only.unwrap_or(false),
        })
    }

    /// True when at least one filter field is populated. Pagination, sort
    /// and the boolean toggles do not count as filters.
    pub fn has_filters(&self) -> bool {
        self.client_id.is_some()
            || self.client_nom.is_some()
            || self.collaborateur_id.is_some()
            || self.collaborateur_nom.is_some()
            || self.manager_id.is_some()
            || self.projet_id.is_some()
            || self.projet_nom.is_some()
            || !self.statuts.is_empty()
            || !self.modes.is_empty()
            || self.date_debut.is_some()
            || self.date_fin.is_some()
            || self.search_term.is_some()
    }

    /// Row offset of the requested page.
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_statuts(raw: Option<&str>) -> Result<Vec<RdqStatut>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let mut statuts = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let statut = RdqStatut::from_str(token).ok_or_else(|| {
            AppError::Validation(format!("statuts contains unknown statut '{}'", token))
        })?;
        if !statuts.contains(&statut) {
            statuts.push(statut);
        }
    }
    Ok(statuts)
}

fn parse_modes(raw: Option<&str>) -> Result<Vec<RdqMode>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let mut modes = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let mode = RdqMode::from_str(token).ok_or_else(|| {
            AppError::Validation(format!("modes contains unknown mode '{}'", token))
        })?;
        if !modes.contains(&mode) {
            modes.push(mode);
        }
    }
    Ok(modes)
}

/// Parse and normalize a date bound so that stored RFC 3339 timestamps
/// compare consistently.
fn parse_date(raw: Option<&str>, field: &str) -> Result<Option<String>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = DateTime::parse_from_rfc3339(trimmed).map_err(|_| {
        AppError::Validation(format!("{} is not a valid RFC 3339 timestamp", field))
    })?;
    Ok(Some(parsed.with_timezone(&Utc).to_rfc3339()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let criteria = RdqSearchCriteria::from_params(RdqSearchParams::default()).unwrap();
        assert_eq!(criteria.page, 0);
        assert_eq!(criteria.size, DEFAULT_PAGE_SIZE);
        assert_eq!(criteria.sort_by, SortField::DateHeure);
        assert_eq!(criteria.sort_direction, SortDirection::Desc);
        assert!(!criteria.include_history);
        assert!(!criteria.has_filters());
    }

    #[test]
    fn size_out_of_range_is_rejected_not_clamped() {
        let params = RdqSearchParams {
            size: Some(0),
            ..Default::default()
        };
        assert!(RdqSearchCriteria::from_params(params).is_err());

        let params = RdqSearchParams {
            size: Some(101),
            ..Default::default()
        };
        assert!(RdqSearchCriteria::from_params(params).is_err());
    }

    #[test]
    fn negative_page_is_rejected() {
        let params = RdqSearchParams {
            page: Some(-1),
            ..Default::default()
        };
        assert!(RdqSearchCriteria::from_params(params).is_err());
    }

    #[test]
    fn unknown_mode_token_fails_validation() {
        let params = RdqSearchParams {
            modes: Some("PRESENTIEL,BOGUS".to_string()),
            ..Default::default()
        };
        let err = RdqSearchCriteria::from_params(params).unwrap_err();
        assert!(err.message().contains("BOGUS"));
    }

    #[test]
    fn statut_list_parses_and_dedupes() {
        let params = RdqSearchParams {
            statuts: Some("PLANIFIE, EN_COURS,PLANIFIE".to_string()),
            ..Default::default()
        };
        let criteria = RdqSearchCriteria::from_params(params).unwrap();
        assert_eq!(
            criteria.statuts,
            vec![RdqStatut::Planifie, RdqStatut::EnCours]
        );
    }

    #[test]
    fn blank_filters_do_not_count_as_populated() {
        let params = RdqSearchParams {
            client_nom: Some("   ".to_string()),
            ..Default::default()
        };
        let criteria = RdqSearchCriteria::from_params(params).unwrap();
        assert!(criteria.client_nom.is_none());
        assert!(!criteria.has_filters());
    }

    #[test]
    fn date_bounds_are_normalized_to_utc() {
        let params = RdqSearchParams {
            date_debut: Some("2026-09-01T10:00:00+02:00".to_string()),
            ..Default::default()
        };
        let criteria = RdqSearchCriteria::from_params(params).unwrap();
        assert_eq!(
            criteria.date_debut.as_deref(),
            Some("2026-09-01T08:00:00+00:00")
        );
    }

    #[test]
    fn invalid_date_bound_names_the_field() {
        let params = RdqSearchParams {
            date_fin: Some("tomorrow".to_string()),
            ..Default::default()
        };
        let err = RdqSearchCriteria::from_params(params).unwrap_err();
        assert!(err.message().contains("dateFin"));
    }
}
