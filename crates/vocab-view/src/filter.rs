//! Filter state and the child-matching predicate.

use std::collections::{BTreeMap, BTreeSet};

use vocab_types::{Concept, FacetField};

/// The set of currently active facet selections.
///
/// Each field holds zero or more selected values; a field with no selection
/// imposes no constraint. Deselecting the last value of a field removes the
/// field entirely, so the default (no constraints) state is canonical.
///
/// Combination is logical AND across fields and logical OR within a field.
///
/// # Examples
///
/// ```
/// use vocab_view::FilterState;
/// use vocab_types::FacetField;
///
/// let mut state = FilterState::new();
/// assert!(state.is_default());
///
/// state.select(FacetField::VocabularyId, "SNOMED");
/// state.select(FacetField::VocabularyId, "ICD10CM");
/// assert!(state.is_selected(FacetField::VocabularyId, "SNOMED"));
///
/// state.deselect(FacetField::VocabularyId, "SNOMED");
/// state.deselect(FacetField::VocabularyId, "ICD10CM");
/// assert!(state.is_default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    selections: BTreeMap<FacetField, BTreeSet<String>>,
}

impl FilterState {
    /// Creates a state with no active constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to a field's selection set.
    pub fn select(&mut self, field: FacetField, value: impl Into<String>) {
        self.selections.entry(field).or_default().insert(value.into());
    }

    /// Removes a value from a field's selection set.
    ///
    /// Removes the field entirely when its last value is deselected.
    pub fn deselect(&mut self, field: FacetField, value: &str) {
        if let Some(values) = self.selections.get_mut(&field) {
            values.remove(value);
            if values.is_empty() {
                self.selections.remove(&field);
            }
        }
    }

    /// Clears all selections for one field.
    pub fn clear_field(&mut self, field: FacetField) {
        self.selections.remove(&field);
    }

    /// Clears all selections, returning to the default state.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Returns true if no field has an active selection.
    pub fn is_default(&self) -> bool {
        self.selections.values().all(BTreeSet::is_empty)
    }

    /// Returns the selected values for a field, if any.
    pub fn selected(&self, field: FacetField) -> Option<&BTreeSet<String>> {
        self.selections.get(&field).filter(|values| !values.is_empty())
    }

    /// Returns true if a value is selected for a field.
    pub fn is_selected(&self, field: FacetField, value: &str) -> bool {
        self.selected(field).is_some_and(|values| values.contains(value))
    }

    /// Decides whether a single concept matches the active selections.
    ///
    /// Every constrained field must contain the concept's value (AND across
    /// fields, OR within a field). A concept with no value for a constrained
    /// field does not match.
    pub fn matches(&self, concept: &Concept) -> bool {
        self.selections
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .all(|(field, values)| match concept.facet_value(*field) {
                Some(value) => values.contains(value),
                None => false,
            })
    }
}
