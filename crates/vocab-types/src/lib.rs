//! # vocab-types
//!
//! Type definitions for OMOP vocabulary concept search results.
//!
//! This crate provides the wire shapes produced by the concept search API
//! (ranked, name-grouped result entries) and the closed set of facet fields
//! results can be narrowed by.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via
//!   serde. Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use vocab_types::{Concept, ConceptGroup, FacetField};
//!
//! let concept = Concept {
//!     concept_id: 201826,
//!     concept_name: "Type 2 diabetes mellitus".to_string(),
//!     domain_id: "Condition".to_string(),
//!     vocabulary_id: "SNOMED".to_string(),
//!     concept_class_id: "Clinical Finding".to_string(),
//!     standard_concept: Some("S".to_string()),
//!     concept_code: "44054006".to_string(),
//!     invalid_reason: None,
//!     valid_start_date: None,
//!     valid_end_date: None,
//! };
//!
//! assert!(concept.is_standard());
//! assert_eq!(concept.facet_value(FacetField::DomainId), Some("Condition"));
//!
//! let entry = ConceptGroup::new("Type 2 diabetes mellitus".to_string(), Some(0.97), vec![concept]);
//! assert_eq!(entry.concepts.len(), 1);
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! vocab-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod concept;
mod field;
mod group;

/// Identifier type for OMOP concepts.
pub type ConceptId = i32;

// Re-export all public types at crate root
pub use concept::Concept;
pub use field::{FacetField, FacetFieldParseError};
pub use group::{fold_by_lower_name, ConceptGroup};
