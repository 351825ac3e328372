//! Pre-folded search index
//!
//! Optional acceleration for repeated queries against one snapshot. Folding
//! field text dominates the cost of a scan, and a catalog is searched once
//! per keystroke while its text never changes, so the index folds every
//! searchable field once up front.
//!
//! # Rules
//!
//! - The index holds positions and folded text only, never the items
//! - `search` returns exactly the positions a scan `filter` would yield
//! - Indexing is OPTIONAL: `filter` works without it

use campus_core::text::fold_case;
use campus_core::Searchable;

use crate::query::Query;

/// Folded text of one item's searchable fields, in field-set order
#[derive(Debug, Clone, Default)]
struct IndexedItem {
    fields: Vec<String>,
}

impl IndexedItem {
    fn matches(&self, folded_query: &str) -> bool {
        folded_query.is_empty() || self.fields.iter().any(|f| f.contains(folded_query))
    }
}

/// Index of pre-folded searchable text for an ordered snapshot
///
/// Built from the same slice it is later queried against; positions in the
/// result refer to that slice.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    items: Vec<IndexedItem>,
}

impl SearchIndex {
    /// Fold and store the searchable text of every item
    pub fn build<T: Searchable>(items: &[T]) -> Self {
        let items: Vec<IndexedItem> = items
            .iter()
            .map(|item| IndexedItem {
                fields: item
                    .search_fields()
                    .iter()
                    .filter_map(|field| item.field_text(field))
                    .map(fold_case)
                    .collect(),
            })
            .collect();
        tracing::debug!(target: "campus::search", items = items.len(), "search index built");
        SearchIndex { items }
    }

    /// Positions of matching items, ascending
    pub fn search(&self, query: &Query) -> Vec<usize> {
        let folded = query.folded();
        let hits: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(folded))
            .map(|(pos, _)| pos)
            .collect();
        tracing::debug!(
            target: "campus::search",
            query_len = query.as_str().len(),
            candidates = self.items.len(),
            hits = hits.len(),
            "index search"
        );
        hits
    }

    /// Resolve matching positions against the indexed slice
    ///
    /// `items` must be the slice the index was built from. A slice of a
    /// different length cannot be that slice, so it yields no items.
    pub fn search_items<'a, T>(&self, items: &'a [T], query: &Query) -> Vec<&'a T> {
        if items.len() != self.items.len() {
            tracing::warn!(
                target: "campus::search",
                indexed = self.items.len(),
                given = items.len(),
                "search_items called with a slice the index was not built from"
            );
            return Vec::new();
        }
        self.search(query)
            .into_iter()
            .filter_map(|pos| items.get(pos))
            .collect()
    }

    /// Whether the item at `pos` matches; false when out of range
    pub fn matches_at(&self, pos: usize, query: &Query) -> bool {
        self.items
            .get(pos)
            .is_some_and(|item| item.matches(query.folded()))
    }

    /// Number of indexed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
