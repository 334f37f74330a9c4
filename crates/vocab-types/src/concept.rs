//! OMOP vocabulary concept type.
//!
//! This module provides the `Concept` struct representing a single row
//! from the CDM `concept` table as returned by the search API.

use crate::{ConceptId, FacetField};

/// A single concept from the OMOP vocabulary.
///
/// Each concept carries the five categorical facet fields
/// (`concept_class_id`, `domain_id`, `invalid_reason`, `standard_concept`,
/// `vocabulary_id`) plus its identifiers and validity dates.
///
/// # Examples
///
/// ```
/// use vocab_types::{Concept, FacetField};
///
/// let concept = Concept {
///     concept_id: 201826,
///     concept_name: "Type 2 diabetes mellitus".to_string(),
///     domain_id: "Condition".to_string(),
///     vocabulary_id: "SNOMED".to_string(),
///     concept_class_id: "Clinical Finding".to_string(),
///     standard_concept: Some("S".to_string()),
///     concept_code: "44054006".to_string(),
///     invalid_reason: None,
///     valid_start_date: None,
///     valid_end_date: None,
/// };
///
/// assert!(concept.is_standard());
/// assert!(concept.is_valid());
/// assert_eq!(concept.facet_value(FacetField::VocabularyId), Some("SNOMED"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Unique identifier for this concept.
    pub concept_id: ConceptId,
    /// Display name of the concept.
    pub concept_name: String,
    /// Domain the concept belongs to (e.g. "Condition", "Drug").
    pub domain_id: String,
    /// Source vocabulary (e.g. "SNOMED", "ICD10CM", "RxNorm").
    pub vocabulary_id: String,
    /// Concept class within the vocabulary (e.g. "Clinical Finding").
    pub concept_class_id: String,
    /// "S" for standard, "C" for classification, absent for non-standard.
    #[cfg_attr(feature = "serde", serde(default))]
    pub standard_concept: Option<String>,
    /// Code of the concept in its source vocabulary.
    pub concept_code: String,
    /// Reason the concept was invalidated, absent for valid concepts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub invalid_reason: Option<String>,
    /// First date of validity (ISO 8601), if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub valid_start_date: Option<String>,
    /// Last date of validity (ISO 8601), if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub valid_end_date: Option<String>,
}

impl Concept {
    /// Returns true if this is a standard concept (`standard_concept == "S"`).
    pub fn is_standard(&self) -> bool {
        self.standard_concept.as_deref() == Some("S")
    }

    /// Returns true if this concept has not been invalidated.
    pub fn is_valid(&self) -> bool {
        self.invalid_reason.is_none()
    }

    /// Returns the raw value of a facet field for this concept.
    ///
    /// Empty strings are normalized to `None`, so callers can treat
    /// missing and blank values uniformly.
    ///
    /// # Examples
    ///
    /// ```
    /// use vocab_types::{Concept, FacetField};
    ///
    /// let concept = Concept {
    ///     concept_id: 1,
    ///     concept_name: "Aspirin".to_string(),
    ///     domain_id: "Drug".to_string(),
    ///     vocabulary_id: "RxNorm".to_string(),
    ///     concept_class_id: "Ingredient".to_string(),
    ///     standard_concept: None,
    ///     concept_code: "1191".to_string(),
    ///     invalid_reason: None,
    ///     valid_start_date: None,
    ///     valid_end_date: None,
    /// };
    ///
    /// assert_eq!(concept.facet_value(FacetField::DomainId), Some("Drug"));
    /// assert_eq!(concept.facet_value(FacetField::StandardConcept), None);
    /// ```
    pub fn facet_value(&self, field: FacetField) -> Option<&str> {
        let value = match field {
            FacetField::ConceptClassId => Some(self.concept_class_id.as_str()),
            FacetField::DomainId => Some(self.domain_id.as_str()),
            FacetField::InvalidReason => self.invalid_reason.as_deref(),
            FacetField::StandardConcept => self.standard_concept.as_deref(),
            FacetField::VocabularyId => Some(self.vocabulary_id.as_str()),
        };
        value.filter(|v| !v.is_empty())
    }
}
