//! Sorting and pagination of the rendered row list.
//!
//! Comparators are stateless and operate on the projection output; the
//! page window is a pure slice over the sorted list.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::ViewError;
use crate::project::RenderRow;

/// Default number of rows per page, matching the search API's default limit.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// The column the rendered list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortKey {
    /// Case-sensitive ordering on the display name.
    ConceptName,
    /// Numeric ordering on the similarity score.
    Score,
}

impl FromStr for SortKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concept_name" => Ok(SortKey::ConceptName),
            "score" => Ok(SortKey::Score),
            _ => Err(ViewError::UnknownSortKey {
                value: s.to_string(),
            }),
        }
    }
}

/// Direction of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(ViewError::UnknownSortDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// Compares two rendered rows by a sort key.
///
/// Score comparison places rows without a score after rows with one,
/// regardless of direction, so missing scores never float to the top of a
/// descending ranking.
pub fn compare_rows(
    a: &RenderRow<'_>,
    b: &RenderRow<'_>,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    match key {
        SortKey::ConceptName => apply_direction(a.concept_name().cmp(b.concept_name()), direction),
        SortKey::Score => match (a.score(), b.score()) {
            (Some(x), Some(y)) => {
                apply_direction(x.partial_cmp(&y).unwrap_or(Ordering::Equal), direction)
            }
            // Missing scores sort last in either direction
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable in-place sort of the rendered row list.
pub fn sort_rows(rows: &mut [RenderRow<'_>], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| compare_rows(a, b, key, direction));
}

/// A page window request: 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    /// 1-based page number. Page 0 is treated as page 1.
    pub page: usize,
    /// Rows per page.
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Creates a request for the first page with the given size.
    pub fn first(size: usize) -> Self {
        Self { page: 1, size }
    }
}

/// One page of the sorted, filtered row list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, 'rows> {
    /// The rows of this page.
    pub rows: &'a [RenderRow<'rows>],
    /// Total row count before windowing.
    pub total: usize,
    /// The request this page answers.
    pub request: PageRequest,
}

/// Pure page window over the sorted, filtered row list.
///
/// A page past the end yields an empty slice; `total` always reports the
/// full filtered count.
///
/// # Examples
///
/// ```
/// use vocab_view::{paginate, PageRequest, RenderRow};
///
/// let rows: Vec<RenderRow> = Vec::new();
/// let page = paginate(&rows, PageRequest::default());
/// assert_eq!(page.total, 0);
/// assert!(page.rows.is_empty());
/// ```
pub fn paginate<'a, 'rows>(
    rows: &'a [RenderRow<'rows>],
    request: PageRequest,
) -> Page<'a, 'rows> {
    let page = request.page.max(1);
    let start = (page - 1).saturating_mul(request.size).min(rows.len());
    let end = start.saturating_add(request.size).min(rows.len());
    Page {
        rows: &rows[start..end],
        total: rows.len(),
        request,
    }
}
