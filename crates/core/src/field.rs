//! Searchable field selection
//!
//! A [`FieldSet`] names which text fields of a course take part in matching.
//! It is chosen once, when the course is built, and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

/// A text field of a course that can be matched against a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Course title, e.g. "Introduction to Algorithms"
    Name,
    /// Short course code, e.g. "CS-201"
    Code,
    /// Term the course is offered in, e.g. "Fall 2024"
    Semester,
    /// Category slug
    Category,
    /// Instructor name, when known
    Instructor,
    /// Free-form description, when present
    Description,
}

impl SearchField {
    /// All fields, in declaration order
    pub const ALL: [SearchField; 6] = [
        SearchField::Name,
        SearchField::Code,
        SearchField::Semester,
        SearchField::Category,
        SearchField::Instructor,
        SearchField::Description,
    ];

    /// Config name of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Code => "code",
            SearchField::Semester => "semester",
            SearchField::Category => "category",
            SearchField::Instructor => "instructor",
            SearchField::Description => "description",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownField(s.to_string()))
    }
}

/// Ordered, duplicate-free, non-empty set of searchable fields
///
/// An empty set is rejected: with nothing to search, even the empty query
/// could not match, which would break the "empty query shows everything"
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<SearchField>", into = "Vec<SearchField>")]
pub struct FieldSet {
    fields: Vec<SearchField>,
}

impl FieldSet {
    /// Build a field set, dropping repeats after their first occurrence
    pub fn new(fields: impl IntoIterator<Item = SearchField>) -> Result<Self> {
        let mut out: Vec<SearchField> = Vec::new();
        for field in fields {
            if !out.contains(&field) {
                out.push(field);
            }
        }
        if out.is_empty() {
            return Err(CatalogError::EmptyFieldSet);
        }
        Ok(FieldSet { fields: out })
    }

    /// Field set with a single field
    pub fn single(field: SearchField) -> Self {
        FieldSet {
            fields: vec![field],
        }
    }

    /// Every searchable field
    pub fn all() -> Self {
        FieldSet {
            fields: SearchField::ALL.to_vec(),
        }
    }

    /// Parse a comma-separated list such as `"name,code"`
    pub fn parse_list(list: &str) -> Result<Self> {
        let fields = list
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<SearchField>>>()?;
        FieldSet::new(fields)
    }

    /// Whether `field` is part of the set
    pub fn contains(&self, field: SearchField) -> bool {
        self.fields.contains(&field)
    }

    /// Fields in configured order
    pub fn iter(&self) -> impl Iterator<Item = SearchField> + '_ {
        self.fields.iter().copied()
    }

    /// Number of fields (always at least one)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Only the course name is searched by default
impl Default for FieldSet {
    fn default() -> Self {
        FieldSet::single(SearchField::Name)
    }
}

impl TryFrom<Vec<SearchField>> for FieldSet {
    type Error = CatalogError;

    fn try_from(value: Vec<SearchField>) -> Result<Self> {
        FieldSet::new(value)
    }
}

impl From<FieldSet> for Vec<SearchField> {
    fn from(value: FieldSet) -> Self {
        value.fields
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}
