//! The closed set of filterable facet fields.

use std::fmt;
use std::str::FromStr;

/// One of the five categorical fields a result set can be narrowed by.
///
/// # Examples
///
/// ```
/// use vocab_types::FacetField;
///
/// let field: FacetField = "vocabulary_id".parse().unwrap();
/// assert_eq!(field, FacetField::VocabularyId);
/// assert_eq!(field.as_str(), "vocabulary_id");
/// assert_eq!(FacetField::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FacetField {
    /// The `concept_class_id` column.
    ConceptClassId,
    /// The `domain_id` column.
    DomainId,
    /// The `invalid_reason` column.
    InvalidReason,
    /// The `standard_concept` column.
    StandardConcept,
    /// The `vocabulary_id` column.
    VocabularyId,
}

impl FacetField {
    /// All facet fields, in column-name order.
    pub const ALL: [FacetField; 5] = [
        FacetField::ConceptClassId,
        FacetField::DomainId,
        FacetField::InvalidReason,
        FacetField::StandardConcept,
        FacetField::VocabularyId,
    ];

    /// Returns the column name for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FacetField::ConceptClassId => "concept_class_id",
            FacetField::DomainId => "domain_id",
            FacetField::InvalidReason => "invalid_reason",
            FacetField::StandardConcept => "standard_concept",
            FacetField::VocabularyId => "vocabulary_id",
        }
    }
}

impl fmt::Display for FacetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown facet field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFieldParseError {
    /// The name that did not match any facet field.
    pub name: String,
}

impl fmt::Display for FacetFieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown facet field: '{}'", self.name)
    }
}

impl std::error::Error for FacetFieldParseError {}

impl FromStr for FacetField {
    type Err = FacetFieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concept_class_id" => Ok(FacetField::ConceptClassId),
            "domain_id" => Ok(FacetField::DomainId),
            "invalid_reason" => Ok(FacetField::InvalidReason),
            "standard_concept" => Ok(FacetField::StandardConcept),
            "vocabulary_id" => Ok(FacetField::VocabularyId),
            _ => Err(FacetFieldParseError {
                name: s.to_string(),
            }),
        }
    }
}
