//! Course data model for Campus.
//!
//! This crate defines the searchable item and the matching rule:
//! - `Course` / `CourseRecord`: immutable course data and its raw form
//! - `SearchField` / `FieldSet`: which fields take part in matching
//! - `Searchable`: the case-insensitive substring predicate
//! - `Catalog`: ordered, immutable snapshot of courses
//! - `text`: locale-independent case folding

#![warn(missing_docs)]

pub mod catalog;
pub mod course;
pub mod error;
pub mod field;
pub mod searchable;
pub mod text;
pub mod types;

pub use catalog::Catalog;
pub use course::{Course, CourseBuilder, CourseRecord};
pub use error::{CatalogError, Result};
pub use field::{FieldSet, SearchField};
pub use searchable::Searchable;
pub use types::{CategoryId, CourseId};
