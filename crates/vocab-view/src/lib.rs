//! # vocab-view
//!
//! Faceted filter-and-collapse engine for vocabulary search results.
//!
//! Search results arrive as a ranked list of name-grouped entries and are
//! presented as a two-level forest: leaves for single concepts, groups for
//! synonym clusters. This crate narrows that forest along five categorical
//! facet fields, re-deriving for every group whether it collapses to its
//! single surviving child, shrinks, or empties — always as a pure projection
//! over the immutable original result set.
//!
//! ## Features
//!
//! - `serde` (default): serializable filter state and option types.
//! - `parallel` (default): `project_parallel` via rayon for large result
//!   sets.
//!
//! ## Usage
//!
//! ```rust
//! use vocab_view::{SearchSession, RenderRow};
//! use vocab_types::{Concept, ConceptGroup, FacetField};
//!
//! # fn concept(id: i32, name: &str, vocabulary: &str) -> Concept {
//! #     Concept {
//! #         concept_id: id,
//! #         concept_name: name.to_string(),
//! #         domain_id: "Condition".to_string(),
//! #         vocabulary_id: vocabulary.to_string(),
//! #         concept_class_id: "Clinical Finding".to_string(),
//! #         standard_concept: None,
//! #         concept_code: id.to_string(),
//! #         invalid_reason: None,
//! #         valid_start_date: None,
//! #         valid_end_date: None,
//! #     }
//! # }
//! let mut session = SearchSession::new();
//! let ticket = session.begin_search();
//! session.install(ticket, vec![ConceptGroup::new(
//!     "Diabetes".to_string(),
//!     Some(0.9),
//!     vec![
//!         concept(1, "Diabetes", "SNOMED"),
//!         concept(2, "Diabetes", "ICD10CM"),
//!     ],
//! )]);
//!
//! session.select(FacetField::VocabularyId, "SNOMED");
//! let view = session.view();
//! assert!(matches!(view.rows[0], RenderRow::Leaf(_)));
//! ```

#![warn(missing_docs)]

mod error;
mod filter;
mod options;
mod project;
mod render;
mod row;
mod session;
mod sort;

// Re-export vocab-types for convenience
pub use vocab_types;

pub use error::{ViewError, ViewResult};
pub use filter::FilterState;
pub use options::{FacetOption, FilterOptionIndex};
pub use project::{project, EmptyGroupPolicy, RenderRow};
pub use render::CellValue;
pub use row::{rows_from_results, ConceptRow, GroupRow, LeafRow};
pub use session::{PageView, SearchSession, SearchTicket};
pub use sort::{
    compare_rows, paginate, sort_rows, Page, PageRequest, SortDirection, SortKey,
    DEFAULT_PAGE_SIZE,
};

#[cfg(feature = "parallel")]
pub use project::project_parallel;
