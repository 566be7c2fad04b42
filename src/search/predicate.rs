//! Predicate builder: compiles search criteria into a list of conditions.
//!
//! The condition list is datastore-agnostic; rendering into a parameterized
//! SQL WHERE clause happens separately so the same predicate can drive the
//! content, count and statistics queries.

use sqlx::{QueryBuilder, Sqlite};

use crate::models::{RdqMode, RdqStatut};

use super::RdqSearchCriteria;

/// Shared FROM clause for all search queries.
///
/// Joins are left-outer so rows with nullable associations survive; the
/// collaborateurs join is one-to-many, so every consumer must request
/// DISTINCT results.
pub const SEARCH_FROM: &str = "FROM rdqs r \
    LEFT JOIN managers m ON m.id = r.manager_id \
    LEFT JOIN projets p ON p.id = r.projet_id \
    LEFT JOIN clients cl ON cl.id = p.client_id \
    LEFT JOIN rdq_collaborateurs rc ON rc.rdq_id = r.id \
    LEFT JOIN collaborateurs co ON co.id = rc.collaborateur_id";

/// One boolean condition over the RDQ entity graph. Conditions are always
/// AND-combined; an absent filter simply produces no condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Equality match on an id-valued column.
    IdEquals { column: &'static str, id: String },
    /// Case-insensitive substring match on a name-valued column.
    NameContains { column: &'static str, term: String },
    /// Status membership test.
    StatutIn(Vec<RdqStatut>),
    /// Status exclusion (used to hide terminal statuses by default).
    StatutNotIn(Vec<RdqStatut>),
    /// Mode membership test.
    ModeIn(Vec<RdqMode>),
    /// Inclusive lower date bound (RFC 3339).
    DateOnOrAfter(String),
    /// Inclusive upper date bound (RFC 3339).
    DateOnOrBefore(String),
    /// Free-text term OR-matched against titre, description and indications.
    TextMatches(String),
}

/// Compile criteria into the AND-combined condition list.
///
/// An empty criteria degrades to "active RDQs only": the sole condition is
/// the terminal-status exclusion, never "match nothing".
pub fn build_conditions(criteria: &RdqSearchCriteria) -> Vec<Condition> {
    let mut conditions = Vec::new();

    if let Some(id) = &criteria.client_id {
        conditions.push(Condition::IdEquals {
            column: "cl.id",
            id: id.clone(),
        });
    }
    if let Some(term) = &criteria.client_nom {
        conditions.push(Condition::NameContains {
            column: "cl.nom",
            term: term.clone(),
        });
    }
    if let Some(id) = &criteria.collaborateur_id {
        conditions.push(Condition::IdEquals {
            column: "co.id",
            id: id.clone(),
        });
    }
    if let Some(term) = &criteria.collaborateur_nom {
        conditions.push(Condition::NameContains {
            column: "co.nom",
            term: term.clone(),
        });
    }
    if let Some(id) = &criteria.manager_id {
        conditions.push(Condition::IdEquals {
            column: "m.id",
            id: id.clone(),
        });
    }
    if let Some(id) = &criteria.projet_id {
        conditions.push(Condition::IdEquals {
            column: "p.id",
            id: id.clone(),
        });
    }
    if let Some(term) = &criteria.projet_nom {
        conditions.push(Condition::NameContains {
            column: "p.nom",
            term: term.clone(),
        });
    }

    if !criteria.statuts.is_empty() {
        conditions.push(Condition::StatutIn(criteria.statuts.clone()));
    }
    if !criteria.modes.is_empty() {
        conditions.push(Condition::ModeIn(criteria.modes.clone()));
    }

    if let Some(bound) = &criteria.date_debut {
        conditions.push(Condition::DateOnOrAfter(bound.clone()));
    }
    if let Some(bound) = &criteria.date_fin {
        conditions.push(Condition::DateOnOrBefore(bound.clone()));
    }

    if let Some(term) = &criteria.search_term {
        conditions.push(Condition::TextMatches(term.clone()));
    }

    // Terminal records are hidden unless history is requested. Explicit
    // statut filters above still apply on their own.
    if !criteria.include_history {
        conditions.push(Condition::StatutNotIn(RdqStatut::TERMINAL.to_vec()));
    }

    // Explicit intent flags. These duplicate the plain id filters once
    // scoping has forced the caller's own id into the criteria.
    if criteria.my_rdqs_only {
        if let Some(id) = &criteria.manager_id {
            conditions.push(Condition::IdEquals {
                column: "m.id",
                id: id.clone(),
            });
        }
    }
    if criteria.my_assignments_only {
        if let Some(id) = &criteria.collaborateur_id {
            conditions.push(Condition::IdEquals {
                column: "co.id",
                id: id.clone(),
            });
        }
    }

    conditions
}

/// Render the condition list as a parameterized WHERE clause.
pub fn push_where(qb: &mut QueryBuilder<'_, Sqlite>, conditions: &[Condition]) {
    for (i, condition) in conditions.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        push_condition(qb, condition);
    }
}

fn push_condition(qb: &mut QueryBuilder<'_, Sqlite>, condition: &Condition) {
    match condition {
        Condition::IdEquals { column, id } => {
            qb.push(*column);
            qb.push(" = ");
            qb.push_bind(id.clone());
        }
        Condition::NameContains { column, term } => {
            qb.push("lower(");
            qb.push(*column);
            qb.push(") LIKE '%' || lower(");
            qb.push_bind(escape_like(term));
            qb.push(") || '%' ESCAPE '\\'");
        }
        Condition::StatutIn(statuts) => {
            qb.push("r.statut IN (");
            let mut separated = qb.separated(", ");
            for statut in statuts {
                separated.push_bind(statut.as_str());
            }
            qb.push(")");
        }
        Condition::StatutNotIn(statuts) => {
            qb.push("r.statut NOT IN (");
            let mut separated = qb.separated(", ");
            for statut in statuts {
                separated.push_bind(statut.as_str());
            }
            qb.push(")");
        }
        Condition::ModeIn(modes) => {
            qb.push("r.mode IN (");
            let mut separated = qb.separated(", ");
            for mode in modes {
                separated.push_bind(mode.as_str());
            }
            qb.push(")");
        }
        Condition::DateOnOrAfter(bound) => {
            qb.push("r.date_heure >= ");
            qb.push_bind(bound.clone());
        }
        Condition::DateOnOrBefore(bound) => {
            qb.push("r.date_heure <= ");
            qb.push_bind(bound.clone());
        }
        Condition::TextMatches(term) => {
            let escaped = escape_like(term);
            qb.push("(lower(r.titre) LIKE '%' || lower(");
            qb.push_bind(escaped.clone());
            qb.push(") || '%' ESCAPE '\\' OR lower(r.description) LIKE '%' || lower(");
            qb.push_bind(escaped.clone());
            qb.push(") || '%' ESCAPE '\\' OR lower(r.indications) LIKE '%' || lower(");
            qb.push_bind(escaped);
            qb.push(") || '%' ESCAPE '\\')");
        }
    }
}

/// Escape LIKE wildcards so filter terms match as literal substrings.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
