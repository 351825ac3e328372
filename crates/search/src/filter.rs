//! Stable collection filter
//!
//! Filtering walks an ordered snapshot front to back and yields the items
//! the query matches. Relative order is preserved, and the lazy form is
//! `Clone`, so a consumer can restart a pass without re-running the query
//! setup.

use std::iter::FusedIterator;
use std::slice;

use campus_core::Searchable;

use crate::query::Query;

/// Lazy, order-preserving filter over a slice
///
/// Created by [`filter`].
#[derive(Debug)]
pub struct Filter<'a, 'q, T> {
    items: slice::Iter<'a, T>,
    query: &'q Query,
}

impl<'a, 'q, T> Clone for Filter<'a, 'q, T> {
    fn clone(&self) -> Self {
        Filter {
            items: self.items.clone(),
            query: self.query,
        }
    }
}

impl<'a, 'q, T: Searchable> Iterator for Filter<'a, 'q, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.query;
        self.items.by_ref().find(|item| query.matches(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.query.is_empty() {
            let left = self.items.len();
            (left, Some(left))
        } else {
            (0, Some(self.items.len()))
        }
    }
}

impl<'a, 'q, T: Searchable> DoubleEndedIterator for Filter<'a, 'q, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let query = self.query;
        self.items.by_ref().rev().find(|item| query.matches(*item))
    }
}

impl<'a, 'q, T: Searchable> FusedIterator for Filter<'a, 'q, T> {}

/// Lazily filter `items` by `query`, keeping their order
///
/// # Example
///
/// ```
/// use campus_core::{CategoryId, Course, CourseId};
/// use campus_search::{filter, Query};
///
/// let cat = CategoryId::new("cs").unwrap();
/// let courses: Vec<Course> = ["Algorithms", "Biology", "Algebra"]
///     .iter()
///     .enumerate()
///     .map(|(i, name)| Course::builder(CourseId(i as u32), *name, cat.clone()).build().unwrap())
///     .collect();
///
/// let query = Query::new("alg");
/// let names: Vec<&str> = filter(&courses, &query).map(|c| c.name()).collect();
/// assert_eq!(names, vec!["Algorithms", "Algebra"]);
/// ```
pub fn filter<'a, 'q, T: Searchable>(items: &'a [T], query: &'q Query) -> Filter<'a, 'q, T> {
    Filter {
        items: items.iter(),
        query,
    }
}

/// Eagerly filter `items` by `query`, keeping their order
pub fn filter_to_vec<'a, T: Searchable>(items: &'a [T], query: &Query) -> Vec<&'a T> {
    let hits: Vec<&'a T> = filter(items, query).collect();
    tracing::trace!(
        target: "campus::search",
        query_len = query.as_str().len(),
        candidates = items.len(),
        hits = hits.len(),
        "scan filter"
    );
    hits
}
