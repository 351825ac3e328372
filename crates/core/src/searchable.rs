//! The `Searchable` trait and the substring predicate
//!
//! An item exposes the text of each [`SearchField`] it carries, plus the
//! [`FieldSet`] it was built with. `matches` is the inclusion test used by
//! every filter in the workspace.

use crate::field::{FieldSet, SearchField};
use crate::text::{fold_case, folded_contains};

/// Trait for records that take part in text search
///
/// Implementors only describe their data; the matching rule is provided.
///
/// # Contract
///
/// - `search_fields()` must return the same set for the lifetime of the item
/// - `field_text()` returns `None` for fields the item does not carry
pub trait Searchable {
    /// Fields considered when matching this item
    fn search_fields(&self) -> &FieldSet;

    /// Text of `field`, if the item has one
    fn field_text(&self, field: SearchField) -> Option<&str>;

    /// Whether `query` occurs, ignoring case, in any searchable field.
    ///
    /// The empty query always matches. Never fails.
    fn matches(&self, query: &str) -> bool {
        self.matches_folded(&fold_case(query))
    }

    /// Same as [`matches`](Searchable::matches) for a query already passed
    /// through [`fold_case`].
    fn matches_folded(&self, folded_query: &str) -> bool {
        if folded_query.is_empty() {
            return true;
        }
        self.search_fields().iter().any(|field| {
            self.field_text(field)
                .is_some_and(|text| folded_contains(text, folded_query))
        })
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> &FieldSet {
        (**self).search_fields()
    }

    fn field_text(&self, field: SearchField) -> Option<&str> {
        (**self).field_text(field)
    }
}

impl<T: Searchable + ?Sized> Searchable for std::sync::Arc<T> {
    fn search_fields(&self) -> &FieldSet {
        (**self).search_fields()
    }

    fn field_text(&self, field: SearchField) -> Option<&str> {
        (**self).field_text(field)
    }
}
