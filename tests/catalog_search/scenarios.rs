//! Reference examples for the search predicate and filter

use crate::test_utils::*;
use campus::{filter, CategoryId, Course, CourseId, Query, Searchable};

fn course(name: &str) -> Course {
    Course::builder(CourseId(1), name, CategoryId::new("misc").unwrap())
        .build()
        .unwrap()
}

#[test]
fn lowercase_query_matches() {
    assert!(course("Introduction to Algorithms").matches("algo"));
}

#[test]
fn uppercase_query_matches() {
    assert!(course("Introduction to Algorithms").matches("ALGO"));
}

#[test]
fn unrelated_query_does_not_match() {
    assert!(!course("Organic Chemistry").matches("algo"));
}

#[test]
fn empty_query_matches() {
    assert!(course("Data Structures").matches(""));
}

#[test]
fn filter_keeps_order() {
    let items: Vec<Course> = ["Algorithms", "Biology", "Algebra"]
        .iter()
        .map(|name| course(name))
        .collect();
    let query = Query::new("alg");
    assert_eq!(
        course_names(filter(&items, &query)),
        vec!["Algorithms", "Algebra"]
    );
}

#[test]
fn sample_catalog_search() {
    let campus = sample_campus();
    assert_eq!(
        names(&campus.search("alg")),
        vec!["Introduction to Algorithms", "Linear Algebra"]
    );
    assert_eq!(names(&campus.search("")).len(), campus.catalog().len());
    assert!(campus.search("astrophysics").is_empty());
}

#[test]
fn unicode_queries() {
    let campus = sample_campus();
    assert_eq!(
        names(&campus.search("STRASSE")),
        vec!["Straßenbau und Verkehrswesen"]
    );
    assert_eq!(
        names(&campus.search("λογος")),
        vec!["Ancient Greek: ΛΟΓΟΣ and Rhetoric"]
    );
}

#[test]
fn punctuation_and_whitespace_are_literal() {
    let campus = sample_campus();
    assert_eq!(names(&campus.search("calculus ii")), vec!["Calculus II"]);
    assert!(campus.search("calculus  ii").is_empty());
    assert_eq!(
        names(&campus.search("greek: ")),
        vec!["Ancient Greek: ΛΟΓΟΣ and Rhetoric"]
    );
}
