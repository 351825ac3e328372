//! Category styles on search results

use crate::test_utils::*;
use campus::{CategoryId, Color};

#[test]
fn builtin_styles_by_category() {
    let campus = sample_campus();
    let hits = campus.search("organic");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].style.icon.as_str(), "flask");
}

#[test]
fn unknown_category_gets_fallback() {
    let campus = sample_campus();
    let hits = campus.search("straße");
    assert_eq!(hits[0].style, campus.palette().fallback());
}

#[test]
fn configured_style_applies() {
    let campus = campus_with(SAMPLE_CONFIG);
    let hits = campus.search("straße");
    assert_eq!(hits[0].style.icon.as_str(), "wrench");
    assert_eq!(hits[0].style.color, Color::rgb(0x60, 0x7d, 0x8b));
}

#[test]
fn style_is_independent_of_course_data() {
    let campus = sample_campus();
    let bio = CategoryId::new("bio").unwrap();
    for hit in campus.search("") {
        if hit.course.category() == &bio {
            assert_eq!(hit.style, campus.palette().style_for(&bio));
        }
    }
}
