//! Catalog snapshot
//!
//! A `Catalog` is an ordered, immutable snapshot of courses. It is what the
//! search layer consumes: whoever observes the live course source builds a
//! new snapshot on change and hands it over; the catalog itself never
//! updates in place.
//!
//! # Design
//!
//! Courses live in an `Arc<[Course]>`, so `Clone` is a pointer copy and a
//! snapshot can be shared across threads without locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::course::{Course, CourseRecord};
use crate::error::{CatalogError, Result};
use crate::field::FieldSet;
use crate::types::CourseId;

/// Ordered, immutable course snapshot
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Arc<[Course]>,
    by_id: Arc<HashMap<CourseId, usize>>,
}

impl Catalog {
    /// Build a catalog from courses, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateCourse` if two courses share an id.
    pub fn new(courses: impl IntoIterator<Item = Course>) -> Result<Self> {
        let courses: Vec<Course> = courses.into_iter().collect();
        let mut by_id = HashMap::with_capacity(courses.len());
        for (pos, course) in courses.iter().enumerate() {
            if by_id.insert(course.id(), pos).is_some() {
                return Err(CatalogError::DuplicateCourse { id: course.id() });
            }
        }
        tracing::debug!(target: "campus::catalog", courses = courses.len(), "catalog built");
        Ok(Catalog {
            courses: courses.into(),
            by_id: Arc::new(by_id),
        })
    }

    /// Build a catalog from raw records, applying `fields` to every course
    pub fn from_records(
        records: impl IntoIterator<Item = CourseRecord>,
        fields: &FieldSet,
    ) -> Result<Self> {
        let courses = records
            .into_iter()
            .map(|record| Course::from_record(record, fields.clone()))
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(courses)
    }

    /// Parse a JSON array of course records
    ///
    /// # Example
    ///
    /// ```
    /// use campus_core::{Catalog, FieldSet};
    ///
    /// let json = r#"[{"id": 1, "name": "Algorithms", "code": "CS-1", "category": "cs"}]"#;
    /// let catalog = Catalog::from_json(json, &FieldSet::default()).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str, fields: &FieldSet) -> Result<Self> {
        let records: Vec<CourseRecord> = serde_json::from_str(json)?;
        Catalog::from_records(records, fields)
    }

    /// An empty catalog
    pub fn empty() -> Self {
        Catalog {
            courses: Arc::from(Vec::new()),
            by_id: Arc::new(HashMap::new()),
        }
    }

    /// Number of courses
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Courses as a slice
    pub fn as_slice(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.position(id).map(|pos| &self.courses[pos])
    }

    /// Position of a course in catalog order
    pub fn position(&self, id: CourseId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SearchField;
    use crate::searchable::Searchable;
    use crate::types::CategoryId;

    const CATALOG: &str = r#"[
        {"id": 3, "name": "Algorithms", "code": "CS-301", "category": "cs"},
        {"id": 1, "name": "Biology", "code": "BIO-101", "category": "bio",
         "instructor": "Rosalind Franklin"},
        {"id": 2, "name": "Algebra", "code": "MATH-120", "category": "math"}
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let catalog = Catalog::from_json(CATALOG, &FieldSet::default()).unwrap();
        let names: Vec<&str> = catalog.iter().map(Course::name).collect();
        assert_eq!(names, vec!["Algorithms", "Biology", "Algebra"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::from_json(CATALOG, &FieldSet::default()).unwrap();
        assert_eq!(catalog.get(CourseId(1)).map(Course::name), Some("Biology"));
        assert_eq!(catalog.position(CourseId(2)), Some(2));
        assert!(catalog.get(CourseId(99)).is_none());
    }

    #[test]
    fn test_fields_applied_to_every_course() {
        let fields = FieldSet::single(SearchField::Instructor);
        let catalog = Catalog::from_json(CATALOG, &fields).unwrap();
        assert!(catalog.iter().all(|c| c.search_fields() == &fields));
        let hits: Vec<CourseId> = catalog
            .iter()
            .filter(|c| c.matches("franklin"))
            .map(Course::id)
            .collect();
        assert_eq!(hits, vec![CourseId(1)]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "code": "", "category": "cs"},
            {"id": 1, "name": "B", "code": "", "category": "cs"}
        ]"#;
        let err = Catalog::from_json(json, &FieldSet::default()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCourse { id: CourseId(1) }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{not json", &FieldSet::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));

        let bad_category = r#"[{"id": 1, "name": "A", "code": "", "category": "Comp Sci"}]"#;
        assert!(matches!(
            Catalog::from_json(bad_category, &FieldSet::default()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"[{"id": 4, "name": " ", "code": "", "category": "cs"}]"#;
        let err = Catalog::from_json(json, &FieldSet::default()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCourse { id: CourseId(4), .. }));
    }

    #[test]
    fn test_clone_shares_snapshot() {
        let course = Course::builder(CourseId(1), "Algorithms", CategoryId::new("cs").unwrap())
            .build()
            .unwrap();
        let catalog = Catalog::new(vec![course]).unwrap();
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.as_slice(), copy.as_slice()));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!((&catalog).into_iter().count(), 0);
    }
}
