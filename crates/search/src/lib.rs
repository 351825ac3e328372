//! Query filtering for Campus course snapshots.

pub mod filter;
pub mod index;
pub mod query;

use campus_core::{Catalog, Course};

pub use filter::{filter, filter_to_vec, Filter};
pub use index::SearchIndex;
pub use query::Query;

/// Extension trait for Catalog to provide search functionality.
pub trait CatalogSearchExt {
    /// Courses matching `query`, in catalog order
    fn search(&self, query: &Query) -> Vec<&Course>;

    /// Build a pre-folded index over this snapshot
    fn index(&self) -> SearchIndex;
}

impl CatalogSearchExt for Catalog {
    fn search(&self, query: &Query) -> Vec<&Course> {
        filter_to_vec(self.as_slice(), query)
    }

    fn index(&self) -> SearchIndex {
        SearchIndex::build(self.as_slice())
    }
}
