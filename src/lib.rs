//! Campus: course catalog search.
//!
//! The [`Campus`] facade bundles an immutable catalog snapshot, a pre-folded
//! search index over it, and the category palette. Searching returns each
//! matching course together with the style it should be drawn with.
//!
//! ```
//! use campus::{Campus, CampusConfig};
//!
//! let json = r#"[
//!     {"id": 1, "name": "Algorithms", "code": "CS-101", "category": "cs"},
//!     {"id": 2, "name": "Biology", "code": "BIO-101", "category": "bio"},
//!     {"id": 3, "name": "Algebra", "code": "MATH-101", "category": "math"}
//! ]"#;
//! let campus = Campus::from_json(json, &CampusConfig::default()).unwrap();
//! let names: Vec<&str> = campus.search("ALG").iter().map(|hit| hit.course.name()).collect();
//! assert_eq!(names, vec!["Algorithms", "Algebra"]);
//! ```

pub mod config;
pub mod error;
pub mod types;

use std::path::Path;

pub use config::{CampusConfig, SearchConfig};
pub use error::{Error, Result};
pub use types::*;

/// A matching course and its presentation style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledCourse<'a> {
    /// The course
    pub course: &'a Course,
    /// Style of the course's category
    pub style: &'a Style,
}

/// Catalog snapshot, index, and palette behind one handle
#[derive(Debug, Clone)]
pub struct Campus {
    catalog: Catalog,
    index: SearchIndex,
    palette: Palette,
}

impl Campus {
    /// Bundle an existing snapshot with a palette
    pub fn new(catalog: Catalog, palette: Palette) -> Self {
        let index = catalog.index();
        tracing::info!(
            target: "campus",
            courses = catalog.len(),
            styled_categories = palette.len(),
            "campus ready"
        );
        Campus {
            catalog,
            index,
            palette,
        }
    }

    /// Build from catalog JSON and configuration
    pub fn from_json(json: &str, config: &CampusConfig) -> Result<Self> {
        let catalog = Catalog::from_json(json, &config.search.fields)?;
        Ok(Campus::new(catalog, config.palette()?))
    }

    /// Read a catalog JSON file and build with `config`
    pub fn open(catalog_path: impl AsRef<Path>, config: &CampusConfig) -> Result<Self> {
        let path = catalog_path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Campus::from_json(&json, config)
    }

    /// Matching courses in catalog order, each with its style
    pub fn search(&self, query: impl Into<Query>) -> Vec<StyledCourse<'_>> {
        let query = query.into();
        self.index
            .search_items(self.catalog.as_slice(), &query)
            .into_iter()
            .map(|course| self.styled(course))
            .collect()
    }

    /// Style a single course
    pub fn styled<'a>(&'a self, course: &'a Course) -> StyledCourse<'a> {
        StyledCourse {
            course,
            style: self.palette.style_for(course.category()),
        }
    }

    /// The catalog snapshot
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The category palette
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the snapshot, rebuilding the index
    ///
    /// The palette is kept. Callers that observe a live course source call
    /// this with each new snapshot.
    pub fn with_catalog(self, catalog: Catalog) -> Self {
        Campus::new(catalog, self.palette)
    }
}
