//! Configured searchable fields

use crate::test_utils::*;
use campus::{CatalogSearchExt, FieldSet, Query, SearchField};

#[test]
fn default_searches_name_only() {
    let campus = sample_campus();
    assert!(campus.search("CS-201").is_empty());
    assert!(campus.search("knuth").is_empty());
}

#[test]
fn sample_config_adds_code() {
    let campus = campus_with(SAMPLE_CONFIG);
    assert_eq!(names(&campus.search("math-1")), vec!["Linear Algebra", "Calculus II"]);
    assert_eq!(names(&campus.search("quantum")), vec!["Quantum Mechanics"]);
}

#[test]
fn instructor_and_description() {
    let fields = FieldSet::new([SearchField::Instructor, SearchField::Description]).unwrap();
    let catalog = sample_catalog(&fields);

    let hits = catalog.search(&Query::new("NOETHER"));
    assert_eq!(course_names(hits), vec!["Linear Algebra"]);

    let hits = catalog.search(&Query::new("mechanisms"));
    assert_eq!(course_names(hits), vec!["Organic Chemistry"]);

    // Names are not searched under this field set
    assert!(catalog.search(&Query::new("Calculus")).is_empty());
}

#[test]
fn category_field() {
    let catalog = sample_catalog(&FieldSet::single(SearchField::Category));
    let hits = catalog.search(&Query::new("MATH"));
    assert_eq!(course_names(hits), vec!["Linear Algebra", "Calculus II"]);
}

#[test]
fn empty_query_matches_courses_without_searchable_text() {
    let catalog = sample_catalog(&FieldSet::single(SearchField::Description));
    let all = catalog.search(&Query::all());
    assert_eq!(all.len(), catalog.len());
    assert_eq!(catalog.search(&Query::new("e")).len(), 3);
}

#[test]
fn semester_is_metadata_unless_configured() {
    let campus = sample_campus();
    assert!(campus.search("spring").is_empty());
    let calculus = campus.search("calculus");
    assert_eq!(calculus[0].course.semester(), "Spring 2025");

    let fields = FieldSet::new([SearchField::Name, SearchField::Semester]).unwrap();
    let catalog = sample_catalog(&fields);
    let hits = catalog.search(&Query::new("SPRING 2025"));
    assert_eq!(
        course_names(hits),
        vec![
            "Data Structures",
            "Molecular Biology",
            "Calculus II",
            "Straßenbau und Verkehrswesen"
        ]
    );
}
