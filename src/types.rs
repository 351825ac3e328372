//! Public types for the Campus API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Course data
pub use campus_core::{Catalog, Course, CourseBuilder, CourseRecord};

// Identifiers
pub use campus_core::{CategoryId, CourseId};

// Field selection and the matching rule
pub use campus_core::{FieldSet, SearchField, Searchable};

// Querying
pub use campus_search::{filter, filter_to_vec, CatalogSearchExt, Filter, Query, SearchIndex};

// Styling
pub use campus_style::{Color, Icon, Palette, PaletteConfig, Style};
