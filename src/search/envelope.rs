//! Search result envelope: page content, pagination metadata, statistics
//! and the echo of the applied criteria.

use serde::Serialize;

use crate::models::RdqSummary;

use super::RdqSearchCriteria;

/// Aggregate statistics computed over the same filtered set as the page
/// content (not the whole table).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdqSearchStats {
    pub rdqs_planifies: i64,
    pub rdqs_en_cours: i64,
    pub rdqs_termines: i64,
    pub rdqs_annules: i64,
    pub rdqs_clos: i64,
    pub total_presentiel: i64,
    pub total_distanciel: i64,
    pub total_hybride: i64,
    /// Average bilan note across the filtered set; absent when no bilan exists.
    pub average_note_bilan: Option<f64>,
    /// Number of filtered RDQs carrying at least one bilan.
    pub total_avec_bilans: i64,
}

/// Paginated search response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdqSearchPage {
    pub content: Vec<RdqSummary>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
    pub search_stats: RdqSearchStats,
    /// Criteria as actually applied, after role scoping.
    pub applied_criteria: RdqSearchCriteria,
}

impl RdqSearchPage {
    /// Assemble the envelope from the executed page and the computed stats.
    ///
    /// Invariants: `totalPages = ceil(totalElements / size)` (0 when empty),
    /// `hasNext = page < totalPages - 1`, `hasPrevious = page > 0`.
    pub fn assemble(
        content: Vec<RdqSummary>,
        total_elements: i64,
        stats: RdqSearchStats,
        criteria: RdqSearchCriteria,
    ) -> Self {
        let page = criteria.page;
        let size = criteria.size;
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };
        let has_next = page < total_pages - 1;
        let has_previous = page > 0;

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            first: !has_previous,
            last: !has_next,
            has_next,
            has_previous,
            search_stats: stats,
            applied_criteria: criteria,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{RdqSearchCriteria, RdqSearchParams};

    fn criteria(page: i64, size: i64) -> RdqSearchCriteria {
        RdqSearchCriteria::from_params(RdqSearchParams {
            page: Some(page),
            size: Some(size),
            ..Default::default()
        })
        .unwrap()
    }

    fn assemble(page: i64, size: i64, total: i64) -> RdqSearchPage {
        RdqSearchPage::assemble(
            Vec::new(),
            total,
            RdqSearchStats::default(),
            criteria(page, size),
        )
    }

    #[test]
    fn total_pages_is_the_ceiling_of_elements_over_size() {
        assert_eq!(assemble(0, 2, 5).total_pages, 3);
        assert_eq!(assemble(0, 10, 10).total_pages, 1);
        assert_eq!(assemble(0, 10, 11).total_pages, 2);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page = assemble(0, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn first_middle_and_last_pages_report_navigation_flags() {
        let first = assemble(0, 2, 5);
        assert!(first.has_next && !first.has_previous);
        assert!(first.first && !first.last);

        let middle = assemble(1, 2, 5);
        assert!(middle.has_next && middle.has_previous);
        assert!(!middle.first && !middle.last);

        let last = assemble(2, 2, 5);
        assert!(!last.has_next && last.has_previous);
        assert!(!last.first && last.last);
    }

    #[test]
    fn page_beyond_the_end_has_no_next() {
        let beyond = assemble(7, 2, 5);
        assert!(!beyond.has_next);
        assert!(beyond.has_previous);
    }
}
