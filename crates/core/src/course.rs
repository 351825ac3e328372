//! Course record
//!
//! `Course` is the searchable item of the catalog. It is built once, either
//! through [`CourseBuilder`] or from a deserialized [`CourseRecord`], and has
//! no setters afterwards.
//!
//! Presentation attributes (colour, icon) are deliberately absent; they are
//! resolved from the category by the styling layer.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::field::{FieldSet, SearchField};
use crate::searchable::Searchable;
use crate::types::{CategoryId, CourseId};

/// Raw course data as it appears in a catalog source
///
/// Unknown keys are rejected so that typos in catalog files surface as
/// parse errors instead of silently empty fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseRecord {
    /// Course identifier
    pub id: CourseId,
    /// Course title
    pub name: String,
    /// Short course code
    pub code: String,
    /// Term the course is offered in
    #[serde(default)]
    pub semester: String,
    /// Category slug
    pub category: CategoryId,
    /// Instructor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An immutable, searchable course
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    name: String,
    code: String,
    semester: String,
    category: CategoryId,
    instructor: Option<String>,
    description: Option<String>,
    search_fields: FieldSet,
}

impl Course {
    /// Start building a course
    pub fn builder(id: CourseId, name: impl Into<String>, category: CategoryId) -> CourseBuilder {
        CourseBuilder::new(id, name.into(), category)
    }

    /// Validate a raw record and fix its searchable fields
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidCourse` if the name is empty or only
    /// whitespace.
    pub fn from_record(record: CourseRecord, search_fields: FieldSet) -> Result<Self> {
        if record.name.trim().is_empty() {
            return Err(CatalogError::InvalidCourse {
                id: record.id,
                reason: "name must not be empty".to_string(),
            });
        }
        Ok(Course {
            id: record.id,
            name: record.name,
            code: record.code,
            semester: record.semester,
            category: record.category,
            instructor: non_blank(record.instructor),
            description: non_blank(record.description),
            search_fields,
        })
    }

    /// Course identifier
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Course title
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short course code (may be empty)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Term the course is offered in (may be empty)
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// Category this course belongs to
    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    /// Instructor name, if known
    pub fn instructor(&self) -> Option<&str> {
        self.instructor.as_deref()
    }

    /// Description, if present
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Convert back into a plain record (search fields are dropped)
    pub fn to_record(&self) -> CourseRecord {
        CourseRecord {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            semester: self.semester.clone(),
            category: self.category.clone(),
            instructor: self.instructor.clone(),
            description: self.description.clone(),
        }
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> &FieldSet {
        &self.search_fields
    }

    fn field_text(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => Some(&self.name),
            SearchField::Code => Some(&self.code),
            SearchField::Semester => Some(&self.semester),
            SearchField::Category => Some(self.category.as_str()),
            SearchField::Instructor => self.instructor.as_deref(),
            SearchField::Description => self.description.as_deref(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Builder for [`Course`]
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    record: CourseRecord,
    search_fields: FieldSet,
}

impl CourseBuilder {
    fn new(id: CourseId, name: String, category: CategoryId) -> Self {
        CourseBuilder {
            record: CourseRecord {
                id,
                name,
                code: String::new(),
                semester: String::new(),
                category,
                instructor: None,
                description: None,
            },
            search_fields: FieldSet::default(),
        }
    }

    /// Set the course code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.record.code = code.into();
        self
    }

    /// Set the semester
    pub fn semester(mut self, semester: impl Into<String>) -> Self {
        self.record.semester = semester.into();
        self
    }

    /// Set the instructor
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.record.instructor = Some(instructor.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    /// Choose the searchable fields (defaults to name only)
    pub fn search_fields(mut self, fields: FieldSet) -> Self {
        self.search_fields = fields;
        self
    }

    /// Validate and build the course
    pub fn build(self) -> Result<Course> {
        Course::from_record(self.record, self.search_fields)
    }
}
