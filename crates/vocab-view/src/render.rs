//! Cell display values.
//!
//! A cell shows either one scalar value or a deduplicated tag set,
//! depending on how many distinct values the row's live members carry.

use vocab_types::FacetField;

use crate::project::RenderRow;

/// The display value of one facet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue<'a> {
    /// The row has no value for this field.
    Empty,
    /// A single value.
    Scalar(&'a str),
    /// Distinct values across a group's live children, in first-occurrence
    /// order. May be empty for a group whose children all failed the filters.
    Tags(Vec<&'a str>),
}

impl<'a> CellValue<'a> {
    /// Returns the scalar value, if this cell holds exactly one.
    pub fn as_scalar(&self) -> Option<&'a str> {
        match self {
            CellValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if there is nothing to display.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Scalar(_) => false,
            CellValue::Tags(tags) => tags.is_empty(),
        }
    }
}

impl<'a> RenderRow<'a> {
    /// Derives the display value for a facet field.
    ///
    /// A leaf renders its single value. A group renders from its *currently
    /// filtered* children: one live child gives a scalar, otherwise the
    /// distinct non-empty values become a tag set (first-occurrence order,
    /// duplicates removed). Note that [`member_count`](RenderRow::member_count)
    /// still reports the unfiltered child count.
    ///
    /// # Examples
    ///
    /// ```
    /// use vocab_view::{project, rows_from_results, CellValue, EmptyGroupPolicy, FilterState};
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
    ///     None,
    ///     vec![concept(1, "SNOMED"), concept(2, "ICD10CM")],
    /// )]);
    ///
    /// let rendered = project(&rows, &FilterState::new(), EmptyGroupPolicy::default());
    /// assert_eq!(
    ///     rendered[0].cell(FacetField::VocabularyId),
    ///     CellValue::Tags(vec!["SNOMED", "ICD10CM"])
    /// );
    /// assert_eq!(
    ///     rendered[0].cell(FacetField::DomainId).as_scalar(),
    ///     None // two children, one distinct value, still a tag set
    /// );
    /// ```
    pub fn cell(&self, field: FacetField) -> CellValue<'a> {
        match self {
            RenderRow::Leaf(leaf) => match leaf.concept.facet_value(field) {
                Some(value) => CellValue::Scalar(value),
                None => CellValue::Empty,
            },
            RenderRow::Group { children, .. } => {
                if let [only] = children.as_slice() {
                    return match only.concept.facet_value(field) {
                        Some(value) => CellValue::Scalar(value),
                        None => CellValue::Empty,
                    };
                }
                let mut tags: Vec<&str> = Vec::new();
                for child in children {
                    if let Some(value) = child.concept.facet_value(field) {
                        if !tags.contains(&value) {
                            tags.push(value);
                        }
                    }
                }
                CellValue::Tags(tags)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_types::{Concept, ConceptGroup};

    use crate::filter::FilterState;
    use crate::project::{project, EmptyGroupPolicy};
    use crate::row::{rows_from_results, ConceptRow};

    fn concept(id: i32, vocabulary: &str, standard: Option<&str>) -> Concept {
        Concept {
            concept_id: id,
            concept_name: "Diabetes".to_string(),
            domain_id: "Condition".to_string(),
            vocabulary_id: vocabulary.to_string(),
            concept_class_id: "Clinical Finding".to_string(),
            standard_concept: standard.map(str::to_string),
            concept_code: id.to_string(),
            invalid_reason: None,
            valid_start_date: None,
            valid_end_date: None,
        }
    }

    fn render_all(rows: &[ConceptRow]) -> Vec<crate::project::RenderRow<'_>> {
        project(rows, &FilterState::new(), EmptyGroupPolicy::Keep)
    }

    #[test]
    fn test_leaf_renders_scalar() {
        let rows = rows_from_results(vec![ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![concept(1, "SNOMED", Some("S"))],
        )]);
        let rendered = render_all(&rows);

        assert_eq!(
            rendered[0].cell(FacetField::VocabularyId),
            CellValue::Scalar("SNOMED")
        );
    }

    #[test]
    fn test_leaf_with_missing_value_renders_empty() {
        let rows = rows_from_results(vec![ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![concept(1, "SNOMED", None)],
        )]);
        let rendered = render_all(&rows);

        let cell = rendered[0].cell(FacetField::StandardConcept);
        assert_eq!(cell, CellValue::Empty);
        assert!(cell.is_empty());
    }

    #[test]
    fn test_group_tags_are_deduplicated_in_first_occurrence_order() {
        let rows = rows_from_results(vec![ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![
                concept(1, "SNOMED", None),
                concept(2, "SNOMED", None),
                concept(3, "ICD10CM", None),
            ],
        )]);
        let rendered = render_all(&rows);

        assert_eq!(
            rendered[0].cell(FacetField::VocabularyId),
            CellValue::Tags(vec!["SNOMED", "ICD10CM"])
        );
    }

    #[test]
    fn test_group_tags_skip_missing_values() {
        let rows = rows_from_results(vec![ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![
                concept(1, "SNOMED", Some("S")),
                concept(2, "ICD10CM", None),
            ],
        )]);
        let rendered = render_all(&rows);

        assert_eq!(
            rendered[0].cell(FacetField::StandardConcept),
            CellValue::Tags(vec!["S"])
        );
    }

    #[test]
    fn test_group_renders_from_filtered_children() {
        let rows = rows_from_results(vec![ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![
                concept(1, "SNOMED", None),
                concept(2, "ICD10CM", None),
                concept(3, "Read", None),
            ],
        )]);
        let mut state = FilterState::new();
        state.select(FacetField::VocabularyId, "SNOMED");
        state.select(FacetField::VocabularyId, "ICD10CM");

        let rendered = project(&rows, &state, EmptyGroupPolicy::Keep);
        assert_eq!(
            rendered[0].cell(FacetField::VocabularyId),
            CellValue::Tags(vec!["SNOMED", "ICD10CM"])
        );
        // Member count keeps the unfiltered total
        assert_eq!(rendered[0].member_count(), 3);
    }

    #[test]
    fn test_empty_match_group_renders_empty_tags() {
        let rows = rows_from_results(vec![ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![concept(1, "SNOMED", None), concept(2, "ICD10CM", None)],
        )]);
        let mut state = FilterState::new();
        state.select(FacetField::VocabularyId, "RxNorm");

        let rendered = project(&rows, &state, EmptyGroupPolicy::Keep);
        let cell = rendered[0].cell(FacetField::VocabularyId);
        assert_eq!(cell, CellValue::Tags(vec![]));
        assert!(cell.is_empty());
    }
}
