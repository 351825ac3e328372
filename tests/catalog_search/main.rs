//! Catalog Search Test Suite
//!
//! End-to-end tests through the `campus` facade, using the sample catalog in
//! `data/courses.json`.
//!
//! ## Test Groups
//!
//! - **scenarios**: the reference query/result examples
//! - **fields**: behaviour under configured searchable fields
//! - **styling**: category styles attached to results
//! - **snapshots**: sharing and swapping catalog snapshots
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test catalog_search
//! ```

mod test_utils;

mod fields;
mod scenarios;
mod snapshots;
mod styling;
