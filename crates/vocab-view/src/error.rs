//! Error types for the view engine.
//!
//! The projection pipeline itself is total; errors only arise at the
//! boundary when parsing field or sort keys supplied by an embedding
//! application (query strings, saved view state, etc.).

use thiserror::Error;
use vocab_types::FacetFieldParseError;

/// Errors that can occur at the view engine boundary.
#[derive(Error, Debug)]
pub enum ViewError {
    /// Unknown facet field name.
    #[error(transparent)]
    UnknownField(#[from] FacetFieldParseError),

    /// Unknown sort key name.
    #[error("unknown sort key: '{value}' (expected 'concept_name' or 'score')")]
    UnknownSortKey {
        /// The value that was not recognized.
        value: String,
    },

    /// Unknown sort direction name.
    #[error("unknown sort direction: '{value}' (expected 'asc' or 'desc')")]
    UnknownSortDirection {
        /// The value that was not recognized.
        value: String,
    },
}

/// Result type for view engine boundary operations.
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_types::FacetField;

    #[test]
    fn test_unknown_field_converts() {
        let err: ViewError = "score".parse::<FacetField>().unwrap_err().into();
        assert!(err.to_string().contains("score"));
    }
}
