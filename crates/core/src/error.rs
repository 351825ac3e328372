//! Error types for catalog construction
//!
//! Matching itself is total and never fails. Errors only arise at the edge,
//! when raw catalog data or field configuration is turned into typed values.

use thiserror::Error;

use crate::types::CourseId;

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building courses, field sets, or catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog data was not valid JSON or did not fit the record shape
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two courses in one catalog share an identifier
    #[error("duplicate course id {id}")]
    DuplicateCourse {
        /// The repeated identifier
        id: CourseId,
    },

    /// A course record violates a field constraint
    #[error("invalid course {id}: {reason}")]
    InvalidCourse {
        /// Identifier of the offending course
        id: CourseId,
        /// What was wrong with it
        reason: String,
    },

    /// A category identifier is not a lowercase slug
    #[error("invalid category id {0:?}: expected a non-empty slug of [a-z0-9-]")]
    InvalidCategory(String),

    /// A field set was configured with no fields
    #[error("field set must name at least one searchable field")]
    EmptyFieldSet,

    /// A field name did not correspond to any searchable field
    #[error("unknown search field {0:?}")]
    UnknownField(String),
}
