//! Selectable filter options with occurrence counts.

use std::collections::BTreeMap;

use tracing::debug;
use vocab_types::FacetField;

use crate::row::ConceptRow;

/// One selectable value for a facet field, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacetOption {
    /// The raw field value.
    pub value: String,
    /// How many concepts in the original result set carry this value.
    pub count: usize,
}

/// The selectable values for every facet field of one loaded result set.
///
/// Built once per result set from the unfiltered rows (every leaf and every
/// group child), and never rebuilt as filters change: displayed counts always
/// reflect the full original result set, independent of current narrowing.
///
/// # Examples
///
/// ```
/// use vocab_view::{rows_from_results, FilterOptionIndex};
/// use vocab_types::{Concept, ConceptGroup, FacetField};
///
/// let rows = rows_from_results(vec![ConceptGroup::new(
///     "Aspirin".to_string(),
///     Some(0.9),
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
///
/// let index = FilterOptionIndex::build(&rows);
/// let options = index.options(FacetField::VocabularyId);
/// assert_eq!(options[0].value, "RxNorm");
/// assert_eq!(options[0].count, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptionIndex {
    by_field: BTreeMap<FacetField, Vec<FacetOption>>,
}

impl FilterOptionIndex {
    /// Builds the index by scanning the unfiltered rows.
    ///
    /// Empty and missing values are ignored. Options are sorted
    /// lexicographically by value.
    pub fn build(rows: &[ConceptRow]) -> Self {
        let mut by_field = BTreeMap::new();
        for field in FacetField::ALL {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for row in rows {
                for value in row.facet_values(field).into_iter().flatten() {
                    *counts.entry(value).or_insert(0) += 1;
                }
            }
            let options: Vec<FacetOption> = counts
                .into_iter()
                .map(|(value, count)| FacetOption {
                    value: value.to_string(),
                    count,
                })
                .collect();
            debug!(field = %field, options = options.len(), "built facet options");
            by_field.insert(field, options);
        }
        Self { by_field }
    }

    /// Returns the selectable options for a field, sorted by value.
    pub fn options(&self, field: FacetField) -> &[FacetOption] {
        self.by_field.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Returns true if no field has any selectable option.
    pub fn is_empty(&self) -> bool {
        self.by_field.values().all(Vec::is_empty)
    }
}
