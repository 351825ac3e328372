//! Snapshot sharing across threads and snapshot replacement

use std::sync::Arc;
use std::thread;

use crate::test_utils::*;
use campus::{Catalog, CatalogSearchExt, CourseId, FieldSet, Query};

#[test]
fn concurrent_queries_on_shared_snapshot() {
    let campus = Arc::new(sample_campus());
    let expected = names(&campus.search("bio")).len();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let campus = Arc::clone(&campus);
            thread::spawn(move || campus.search("BIO").len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn swapped_snapshot_is_searched() {
    let campus = sample_campus();
    let before = campus.search("calculus").len();
    assert_eq!(before, 1);

    let smaller = Catalog::new(
        campus
            .catalog()
            .iter()
            .filter(|c| c.id() != CourseId(402))
            .cloned(),
    )
    .unwrap();
    let campus = campus.with_catalog(smaller);
    assert!(campus.search("calculus").is_empty());
}

#[test]
fn old_snapshot_unaffected_by_new_one() {
    let original = sample_catalog(&FieldSet::default());
    let kept = original.clone();
    let replacement = Catalog::new(Vec::new()).unwrap();
    drop(original);

    assert!(replacement.search(&Query::new("alg")).is_empty());
    assert_eq!(kept.search(&Query::new("alg")).len(), 2);
}
