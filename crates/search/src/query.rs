//! Search query
//!
//! A `Query` keeps the text as typed and its folded form, so a filter pass
//! folds the query once instead of once per item.

use std::fmt;

use campus_core::text::fold_case;
use campus_core::Searchable;

/// User-supplied search text, folded once at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Query {
    raw: String,
    folded: String,
}

impl Query {
    /// Create a query from raw input
    ///
    /// Any string is accepted. The empty string is the "no filter" query.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = fold_case(&raw);
        Query { raw, folded }
    }

    /// Query that matches everything
    pub fn all() -> Self {
        Query::default()
    }

    /// The text as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The folded text used for comparison
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Whether this is the "no filter" query
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Whether `item` should be included for this query
    #[inline]
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        item.matches_folded(&self.folded)
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Query::new(value)
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Query::new(value)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
