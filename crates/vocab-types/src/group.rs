//! Ranked search-result entries.
//!
//! The similarity search returns entries already grouped by display name;
//! `ConceptGroup` is that wire shape. Entries with the same lowercased name
//! can be folded together so that case variants of one name render as a
//! single synonym group.

use crate::Concept;

/// One entry of the ranked result list returned by the search API.
///
/// An entry with a single concept renders as a leaf; an entry with several
/// concepts sharing the display name renders as a synonym group.
///
/// # Examples
///
/// ```
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
/// assert_eq!(entry.concept_name_lower, "aspirin");
/// assert_eq!(entry.concepts.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptGroup {
    /// Display name shared by all concepts in this entry.
    pub concept_name: String,
    /// Lowercased display name, used for case-insensitive folding.
    pub concept_name_lower: String,
    /// Similarity score from the ranked search, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: Option<f32>,
    /// The concepts sharing this display name.
    pub concepts: Vec<Concept>,
}

impl ConceptGroup {
    /// Creates an entry, deriving `concept_name_lower` from the name.
    pub fn new(concept_name: String, score: Option<f32>, concepts: Vec<Concept>) -> Self {
        let concept_name_lower = concept_name.to_lowercase();
        Self {
            concept_name,
            concept_name_lower,
            score,
            concepts,
        }
    }

    /// Moves all concepts from `other` into this entry.
    ///
    /// Used when folding case variants of the same display name.
    pub fn append_concepts(&mut self, other: &mut Vec<Concept>) {
        self.concepts.append(other);
    }
}

/// Folds entries whose lowercased names match into a single entry.
///
/// Input order is preserved: the first occurrence of each name keeps its
/// position (and its score), later case variants contribute only their
/// concepts. The search API assembles ranked results this way so that
/// "Aspirin" and "ASPIRIN" show as one synonym group.
///
/// # Examples
///
/// ```
/// use vocab_types::{ConceptGroup, fold_by_lower_name};
///
/// let entries = vec![
///     ConceptGroup::new("Aspirin".to_string(), Some(0.9), vec![]),
///     ConceptGroup::new("ASPIRIN".to_string(), Some(0.8), vec![]),
///     ConceptGroup::new("Warfarin".to_string(), Some(0.7), vec![]),
/// ];
///
/// let folded = fold_by_lower_name(entries);
/// assert_eq!(folded.len(), 2);
/// assert_eq!(folded[0].concept_name, "Aspirin");
/// ```
pub fn fold_by_lower_name(entries: Vec<ConceptGroup>) -> Vec<ConceptGroup> {
    let mut folded: Vec<ConceptGroup> = Vec::with_capacity(entries.len());
    for mut entry in entries {
        match folded
            .iter_mut()
            .find(|existing| existing.concept_name_lower == entry.concept_name_lower)
        {
            Some(existing) => existing.append_concepts(&mut entry.concepts),
            None => folded.push(entry),
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(id: i32, name: &str) -> Concept {
        Concept {
            concept_id: id,
            concept_name: name.to_string(),
            domain_id: "Condition".to_string(),
            vocabulary_id: "SNOMED".to_string(),
            concept_class_id: "Clinical Finding".to_string(),
            standard_concept: None,
            concept_code: id.to_string(),
            invalid_reason: None,
            valid_start_date: None,
            valid_end_date: None,
        }
    }

    #[test]
    fn test_new_derives_lower_name() {
        let entry = ConceptGroup::new("Myocardial Infarction".to_string(), None, vec![]);
        assert_eq!(entry.concept_name_lower, "myocardial infarction");
    }

    #[test]
    fn test_fold_merges_case_variants() {
        let entries = vec![
            ConceptGroup::new("Aspirin".to_string(), Some(0.9), vec![concept(1, "Aspirin")]),
            ConceptGroup::new("ASPIRIN".to_string(), Some(0.8), vec![concept(2, "ASPIRIN")]),
        ];

        let folded = fold_by_lower_name(entries);
        assert_eq!(folded.len(), 1);
        assert_eq!(folded[0].concept_name, "Aspirin");
        assert_eq!(folded[0].score, Some(0.9));
        let ids: Vec<i32> = folded[0].concepts.iter().map(|c| c.concept_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_fold_preserves_input_order() {
        let entries = vec![
            ConceptGroup::new("B".to_string(), None, vec![]),
            ConceptGroup::new("A".to_string(), None, vec![]),
            ConceptGroup::new("b".to_string(), None, vec![concept(3, "b")]),
        ];

        let folded = fold_by_lower_name(entries);
        let names: Vec<&str> = folded.iter().map(|e| e.concept_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(folded[0].concepts.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let entry = ConceptGroup::new(
            "Aspirin".to_string(),
            Some(0.5),
            vec![concept(1, "Aspirin")],
        );
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: ConceptGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }
}
