//! Search session state.
//!
//! A session owns the immutable snapshot of one loaded result set together
//! with the interactive view state (filters, sort, page). Every view is
//! re-derived in full from the snapshot; no partial state survives between
//! recomputations.
//!
//! Result installation is last-search-wins: `begin_search` issues a
//! generation ticket, and `install` only accepts the ticket of the newest
//! search, so a slow in-flight fetch can never overwrite newer results. A
//! failed fetch simply never installs, leaving the previous view intact.

use tracing::{debug, info};
use vocab_types::{ConceptGroup, FacetField};

use crate::filter::FilterState;
use crate::options::FilterOptionIndex;
use crate::project::{project, EmptyGroupPolicy, RenderRow};
use crate::row::{rows_from_results, ConceptRow};
use crate::sort::{paginate, sort_rows, PageRequest, SortDirection, SortKey};

/// Token identifying one issued search.
///
/// Obtained from [`SearchSession::begin_search`] and redeemed by
/// [`SearchSession::install`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a ticket that is never installed leaves the session unchanged"]
pub struct SearchTicket {
    generation: u64,
}

/// One rendered page of the session's current view.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// The rows of the current page, post-filter and post-sort.
    pub rows: Vec<RenderRow<'a>>,
    /// Total rendered row count across all pages.
    pub total: usize,
    /// The page window that produced `rows`.
    pub request: PageRequest,
}

/// Interactive state over one loaded result set.
///
/// # Examples
///
/// ```
/// use vocab_view::SearchSession;
/// use vocab_types::{Concept, ConceptGroup};
///
/// let mut session = SearchSession::new();
/// let ticket = session.begin_search();
/// let installed = session.install(ticket, vec![ConceptGroup::new(
///     "Aspirin".to_string(),
///     Some(0.93),
///     vec![Concept {
///         concept_id: 1112807,
///         concept_name: "Aspirin".to_string(),
///         domain_id: "Drug".to_string(),
///         vocabulary_id: "RxNorm".to_string(),
///         concept_class_id: "Ingredient".to_string(),
///         standard_concept: Some("S".to_string()),
///         concept_code: "1191".to_string(),
///         invalid_reason: None,
///         valid_start_date: None,
///         valid_end_date: None,
///     }],
/// )]);
/// assert!(installed);
///
/// let view = session.view();
/// assert_eq!(view.total, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SearchSession {
    rows: Vec<ConceptRow>,
    options: FilterOptionIndex,
    filter: FilterState,
    sort_key: SortKey,
    sort_direction: SortDirection,
    page: PageRequest,
    empty_groups: EmptyGroupPolicy,
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            options: FilterOptionIndex::default(),
            filter: FilterState::default(),
            // Ranked results arrive best-first; mirror that by default.
            sort_key: SortKey::Score,
            sort_direction: SortDirection::Descending,
            page: PageRequest::default(),
            empty_groups: EmptyGroupPolicy::default(),
            generation: 0,
        }
    }
}

impl SearchSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given empty-group policy.
    pub fn with_empty_group_policy(policy: EmptyGroupPolicy) -> Self {
        Self {
            empty_groups: policy,
            ..Self::default()
        }
    }

    /// Registers a new search, invalidating all previously issued tickets.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        SearchTicket {
            generation: self.generation,
        }
    }

    /// Replaces the result set if `ticket` is still the newest search.
    ///
    /// On success the snapshot, option index, filter state, sort and page
    /// are all replaced or reset together, and the method returns `true`.
    /// A stale ticket (a newer search has begun since) is discarded and the
    /// session is left untouched.
    pub fn install(&mut self, ticket: SearchTicket, results: Vec<ConceptGroup>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale search result"
            );
            return false;
        }

        self.rows = rows_from_results(results);
        self.options = FilterOptionIndex::build(&self.rows);
        self.filter = FilterState::default();
        self.sort_key = SortKey::Score;
        self.sort_direction = SortDirection::Descending;
        self.page.page = 1;
        info!(rows = self.rows.len(), "installed search results");
        true
    }

    /// The immutable snapshot of the current result set.
    pub fn rows(&self) -> &[ConceptRow] {
        &self.rows
    }

    /// Selectable options for the current result set.
    pub fn options(&self) -> &FilterOptionIndex {
        &self.options
    }

    /// The active filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Adds a facet selection and resets to page 1.
    pub fn select(&mut self, field: FacetField, value: impl Into<String>) {
        self.filter.select(field, value);
        self.page.page = 1;
    }

    /// Removes a facet selection and resets to page 1.
    pub fn deselect(&mut self, field: FacetField, value: &str) {
        self.filter.deselect(field, value);
        self.page.page = 1;
    }

    /// Clears all facet selections and resets to page 1.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.page.page = 1;
    }

    /// Changes the sort order and resets to page 1.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
        self.page.page = 1;
    }

    /// Moves to a page (1-based).
    pub fn set_page(&mut self, page: usize) {
        self.page.page = page.max(1);
    }

    /// Changes the page size and resets to page 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page.size = size;
        self.page.page = 1;
    }

    /// Re-derives the current page from the snapshot.
    ///
    /// Projection, sort and windowing all run from scratch on every call.
    pub fn view(&self) -> PageView<'_> {
        let mut rendered = project(&self.rows, &self.filter, self.empty_groups);
        sort_rows(&mut rendered, self.sort_key, self.sort_direction);
        let page = paginate(&rendered, self.page);
        PageView {
            total: page.total,
            request: page.request,
            rows: page.rows.to_vec(),
        }
    }
}
