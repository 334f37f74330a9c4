//! The collapse/filter projection.
//!
//! `project` re-derives the rendered row list from the immutable original
//! dataset and the current filter state. It never mutates or clones the
//! source rows; its output borrows into them.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tracing::debug;

use crate::filter::FilterState;
use crate::row::{ConceptRow, GroupRow, LeafRow};

/// What to do with a group whose children all fail the active filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyGroupPolicy {
    /// Keep the group row with an empty child list.
    #[default]
    Keep,
    /// Suppress the group row from the output entirely.
    Drop,
}

/// A row of the rendered view, borrowing from the original dataset.
///
/// A `Leaf` is either an original top-level leaf or a group child promoted
/// by collapse. A `Group` pairs the original group with the subsequence of
/// children that match the active filters.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRow<'a> {
    /// A single concept.
    Leaf(&'a LeafRow),
    /// A group and its currently matching children.
    Group {
        /// The original, unfiltered group.
        group: &'a GroupRow,
        /// The children matching the active filters, in input order.
        children: Vec<&'a LeafRow>,
    },
}

impl<'a> RenderRow<'a> {
    /// Returns the display name of this row.
    pub fn concept_name(&self) -> &'a str {
        match self {
            RenderRow::Leaf(leaf) => &leaf.concept.concept_name,
            RenderRow::Group { group, .. } => &group.concept_name,
        }
    }

    /// Returns the similarity score, if any.
    ///
    /// Groups and collapsed children carry no score.
    pub fn score(&self) -> Option<f32> {
        match self {
            RenderRow::Leaf(leaf) => leaf.score,
            RenderRow::Group { .. } => None,
        }
    }

    /// Number of member concepts shown for this row.
    ///
    /// For a group this is the original, unfiltered child count even while
    /// filters are active; the tag rendering, by contrast, uses the filtered
    /// subset. The display keeps that asymmetry on purpose.
    pub fn member_count(&self) -> usize {
        match self {
            RenderRow::Leaf(_) => 1,
            RenderRow::Group { group, .. } => group.children.len(),
        }
    }

    /// The currently matching children of a group; empty for a leaf.
    pub fn live_children(&self) -> &[&'a LeafRow] {
        match self {
            RenderRow::Leaf(_) => &[],
            RenderRow::Group { children, .. } => children,
        }
    }
}

/// Projects one top-level row under an active filter state.
fn project_row<'a>(
    row: &'a ConceptRow,
    state: &FilterState,
    policy: EmptyGroupPolicy,
) -> Option<RenderRow<'a>> {
    match row {
        // Top-level leaves pass through unchanged; facet filters only
        // narrow within groups.
        ConceptRow::Leaf(leaf) => Some(RenderRow::Leaf(leaf)),
        ConceptRow::Group(group) => {
            let matched: Vec<&LeafRow> = group
                .children
                .iter()
                .filter(|child| state.matches(&child.concept))
                .collect();
            match matched.len() {
                // Exactly one survivor collapses the group to a leaf.
                1 => Some(RenderRow::Leaf(matched[0])),
                0 if policy == EmptyGroupPolicy::Drop => None,
                _ => Some(RenderRow::Group {
                    group,
                    children: matched,
                }),
            }
        }
    }
}

/// Passes every row through unchanged, groups keeping their full children.
fn project_identity(rows: &[ConceptRow]) -> Vec<RenderRow<'_>> {
    rows.iter()
        .map(|row| match row {
            ConceptRow::Leaf(leaf) => RenderRow::Leaf(leaf),
            ConceptRow::Group(group) => RenderRow::Group {
                group,
                children: group.children.iter().collect(),
            },
        })
        .collect()
}

/// Recomputes the rendered row list from the original dataset.
///
/// Pure and total: rerunning with the same inputs yields the same output,
/// and a default (no constraints) filter state reproduces the original list
/// structurally, so clearing filters always round-trips.
///
/// With active filters, each group's children are narrowed in input order;
/// a group with exactly one matching child collapses to that child, and a
/// group with no matching children follows `policy`.
///
/// # Examples
///
/// ```
/// use vocab_view::{project, rows_from_results, EmptyGroupPolicy, FilterState, RenderRow};
/// use vocab_types::{Concept, ConceptGroup, FacetField};
///
/// # fn concept(id: i32, vocabulary: &str) -> Concept {
/// #     Concept {
/// #         concept_id: id,
/// #         concept_name: "Diabetes".to_string(),
/// #         domain_id: "Condition".to_string(),
/// #         vocabulary_id: vocabulary.to_string(),
/// #         concept_class_id: "Clinical Finding".to_string(),
/// #         standard_concept: None,
/// #         concept_code: id.to_string(),
/// #         invalid_reason: None,
/// #         valid_start_date: None,
/// #         valid_end_date: None,
/// #     }
/// # }
/// let rows = rows_from_results(vec![ConceptGroup::new(
///     "Diabetes".to_string(),
///     Some(0.9),
///     vec![concept(1, "SNOMED"), concept(2, "ICD10CM")],
/// )]);
///
/// let mut state = FilterState::new();
/// state.select(FacetField::VocabularyId, "SNOMED");
///
/// let rendered = project(&rows, &state, EmptyGroupPolicy::default());
/// match &rendered[0] {
///     RenderRow::Leaf(leaf) => assert_eq!(leaf.concept.concept_id, 1),
///     RenderRow::Group { .. } => panic!("group should collapse"),
/// }
/// ```
pub fn project<'a>(
    rows: &'a [ConceptRow],
    state: &FilterState,
    policy: EmptyGroupPolicy,
) -> Vec<RenderRow<'a>> {
    if state.is_default() {
        return project_identity(rows);
    }

    let rendered: Vec<RenderRow<'a>> = rows
        .iter()
        .filter_map(|row| project_row(row, state, policy))
        .collect();
    debug!(input = rows.len(), output = rendered.len(), "projected rows");
    rendered
}

/// Parallel variant of [`project`] for large result sets.
///
/// Rows are projected independently, so output order still matches input
/// order.
#[cfg(feature = "parallel")]
pub fn project_parallel<'a>(
    rows: &'a [ConceptRow],
    state: &FilterState,
    policy: EmptyGroupPolicy,
) -> Vec<RenderRow<'a>> {
    if state.is_default() {
        return project_identity(rows);
    }

    rows.par_iter()
        .filter_map(|row| project_row(row, state, policy))
        .collect()
}
