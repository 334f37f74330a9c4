//! The two-level result forest.
//!
//! Top-level rows are either a single concept (leaf) or a synonym group of
//! concepts sharing a display name. The leaf/group distinction is encoded in
//! the `ConceptRow` enum rather than an optional children field, so a row is
//! a leaf exactly when it has no children by construction.

use tracing::warn;
use vocab_types::{Concept, ConceptGroup, FacetField};

/// A leaf-shaped row: exactly one concept, with an optional similarity score.
///
/// Group children are also `LeafRow`s; they carry no score of their own
/// (scores belong to ranked top-level entries).
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRow {
    /// The concept this row represents.
    pub concept: Concept,
    /// Similarity score from the ranked search, if any.
    pub score: Option<f32>,
}

/// A synonym group: two or more concepts sharing a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    /// Display name shared by the children.
    pub concept_name: String,
    /// Lowercased display name.
    pub concept_name_lower: String,
    /// The member concepts, in ranked order.
    pub children: Vec<LeafRow>,
}

/// A top-level row of the result forest.
///
/// # Examples
///
/// ```
/// use vocab_view::ConceptRow;
/// use vocab_types::{Concept, ConceptGroup};
///
/// let entry = ConceptGroup::new(
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
/// );
///
/// let row = ConceptRow::from_entry(entry).unwrap();
/// assert!(row.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ConceptRow {
    /// A single concept.
    Leaf(LeafRow),
    /// A name-sharing cluster of concepts.
    Group(GroupRow),
}

impl ConceptRow {
    /// Converts one ranked result entry into a row.
    ///
    /// A single-concept entry becomes a leaf carrying the entry's score; a
    /// multi-concept entry becomes a group whose children are leaf-shaped
    /// rows without individual scores. Returns `None` for a malformed entry
    /// with no concepts.
    pub fn from_entry(entry: ConceptGroup) -> Option<Self> {
        let ConceptGroup {
            concept_name,
            concept_name_lower,
            score,
            mut concepts,
        } = entry;

        match concepts.len() {
            0 => None,
            1 => Some(ConceptRow::Leaf(LeafRow {
                concept: concepts.remove(0),
                score,
            })),
            _ => Some(ConceptRow::Group(GroupRow {
                concept_name,
                concept_name_lower,
                children: concepts
                    .into_iter()
                    .map(|concept| LeafRow {
                        concept,
                        score: None,
                    })
                    .collect(),
            })),
        }
    }

    /// Returns true if this row is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, ConceptRow::Leaf(_))
    }

    /// Returns true if this row is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, ConceptRow::Group(_))
    }

    /// Returns the display name of this row.
    pub fn concept_name(&self) -> &str {
        match self {
            ConceptRow::Leaf(leaf) => &leaf.concept.concept_name,
            ConceptRow::Group(group) => &group.concept_name,
        }
    }

    /// Uniform read of a facet field as an ordered sequence of raw values.
    ///
    /// Length 1 for a leaf, one entry per child for a group. Missing and
    /// blank values appear as `None` so the sequence length always matches
    /// the member count.
    pub fn facet_values(&self, field: FacetField) -> Vec<Option<&str>> {
        match self {
            ConceptRow::Leaf(leaf) => vec![leaf.concept.facet_value(field)],
            ConceptRow::Group(group) => group
                .children
                .iter()
                .map(|child| child.concept.facet_value(field))
                .collect(),
        }
    }
}

/// Transforms a ranked result list into the row forest.
///
/// Entries with no concepts are skipped with a warning rather than
/// failing the whole result set.
pub fn rows_from_results(results: Vec<ConceptGroup>) -> Vec<ConceptRow> {
    let mut rows = Vec::with_capacity(results.len());
    for entry in results {
        let name = entry.concept_name.clone();
        match ConceptRow::from_entry(entry) {
            Some(row) => rows.push(row),
            None => warn!(concept_name = %name, "skipping result entry with no concepts"),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(id: i32, name: &str, vocabulary: &str) -> Concept {
        Concept {
            concept_id: id,
            concept_name: name.to_string(),
            domain_id: "Condition".to_string(),
            vocabulary_id: vocabulary.to_string(),
            concept_class_id: "Clinical Finding".to_string(),
            standard_concept: None,
            concept_code: id.to_string(),
            invalid_reason: None,
            valid_start_date: None,
            valid_end_date: None,
        }
    }

    #[test]
    fn test_single_concept_entry_becomes_leaf() {
        let entry = ConceptGroup::new(
            "Diabetes".to_string(),
            Some(0.9),
            vec![concept(1, "Diabetes", "SNOMED")],
        );

        let row = ConceptRow::from_entry(entry).unwrap();
        match row {
            ConceptRow::Leaf(leaf) => {
                assert_eq!(leaf.concept.concept_id, 1);
                assert_eq!(leaf.score, Some(0.9));
            }
            ConceptRow::Group(_) => panic!("expected leaf"),
        }
    }

    #[test]
    fn test_multi_concept_entry_becomes_group() {
        let entry = ConceptGroup::new(
            "Diabetes".to_string(),
            Some(0.9),
            vec![
                concept(1, "Diabetes", "SNOMED"),
                concept(2, "Diabetes", "ICD10CM"),
            ],
        );

        let row = ConceptRow::from_entry(entry).unwrap();
        match row {
            ConceptRow::Group(group) => {
                assert_eq!(group.children.len(), 2);
                // Children carry no individual score
                assert!(group.children.iter().all(|c| c.score.is_none()));
                assert_eq!(group.concept_name_lower, "diabetes");
            }
            ConceptRow::Leaf(_) => panic!("expected group"),
        }
    }

    #[test]
    fn test_empty_entry_is_skipped() {
        let results = vec![
            ConceptGroup::new("Empty".to_string(), None, vec![]),
            ConceptGroup::new(
                "Diabetes".to_string(),
                None,
                vec![concept(1, "Diabetes", "SNOMED")],
            ),
        ];

        let rows = rows_from_results(results);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].concept_name(), "Diabetes");
    }

    #[test]
    fn test_facet_values_length_matches_member_count() {
        let leaf = ConceptRow::from_entry(ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![concept(1, "Diabetes", "SNOMED")],
        ))
        .unwrap();
        assert_eq!(
            leaf.facet_values(FacetField::VocabularyId),
            vec![Some("SNOMED")]
        );

        let group = ConceptRow::from_entry(ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![
                concept(1, "Diabetes", "SNOMED"),
                concept(2, "Diabetes", "ICD10CM"),
            ],
        ))
        .unwrap();
        assert_eq!(
            group.facet_values(FacetField::VocabularyId),
            vec![Some("SNOMED"), Some("ICD10CM")]
        );
    }

    #[test]
    fn test_facet_values_keep_missing_slots() {
        let group = ConceptRow::from_entry(ConceptGroup::new(
            "Diabetes".to_string(),
            None,
            vec![
                concept(1, "Diabetes", "SNOMED"),
                concept(2, "Diabetes", "ICD10CM"),
            ],
        ))
        .unwrap();

        // standard_concept is absent on both children
        assert_eq!(
            group.facet_values(FacetField::StandardConcept),
            vec![None, None]
        );
    }
}
