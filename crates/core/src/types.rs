//! Identifier types
//!
//! - CourseId: numeric course identifier from the catalog source
//! - CategoryId: lowercase slug naming a course category ("cs", "bio", ...)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

/// Unique identifier of a course within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl CourseId {
    /// Raw numeric value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for CourseId {
    fn from(value: u32) -> Self {
        CourseId(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category identifier
///
/// A non-empty slug of `[a-z0-9-]`. Input is trimmed and lowercased before
/// validation, so `" CS "` and `"cs"` name the same category.
///
/// Categories are the key presentation attributes are looked up by; the
/// course itself never carries colours or icons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Validate and normalize a category identifier
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let slug = raw.as_ref().trim().to_ascii_lowercase();
        let valid = !slug.is_empty()
            && slug
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if valid {
            Ok(CategoryId(slug))
        } else {
            Err(CatalogError::InvalidCategory(raw.as_ref().to_string()))
        }
    }

    /// The normalized slug
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        CategoryId::new(s)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self> {
        CategoryId::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
