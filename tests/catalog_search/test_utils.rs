//! Shared fixtures

use campus::{Campus, CampusConfig, Catalog, Course, FieldSet, StyledCourse};

pub const SAMPLE_CATALOG: &str = include_str!("../../data/courses.json");
pub const SAMPLE_CONFIG: &str = include_str!("../../data/campus.toml");

pub fn sample_campus() -> Campus {
    Campus::from_json(SAMPLE_CATALOG, &CampusConfig::default()).unwrap()
}

pub fn campus_with(config_toml: &str) -> Campus {
    let config = CampusConfig::from_toml_str(config_toml).unwrap();
    Campus::from_json(SAMPLE_CATALOG, &config).unwrap()
}

pub fn sample_catalog(fields: &FieldSet) -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG, fields).unwrap()
}

pub fn names<'a>(hits: &[StyledCourse<'a>]) -> Vec<&'a str> {
    hits.iter().map(|h| h.course.name()).collect()
}

pub fn course_names<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<&'a str> {
    courses.into_iter().map(Course::name).collect()
}
