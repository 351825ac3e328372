//! Category styling for Campus.
//!
//! Courses carry no presentation data. The view layer asks a [`Palette`]
//! for the [`Style`] of a course's category instead.

#![warn(missing_docs)]

pub mod color;
pub mod palette;

use thiserror::Error;

pub use color::{Color, Icon};
pub use palette::{Palette, PaletteConfig, Style};

/// Errors raised while validating style configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Color was not `#RRGGBB` or `#RRGGBBAA`
    #[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// Icon name was empty
    #[error("invalid icon {0:?}: name must not be empty")]
    InvalidIcon(String),

    /// Palette key was not a valid category slug
    #[error("invalid category {0:?} in palette")]
    InvalidCategory(String),

    /// Two palette keys name the same category once normalized
    #[error("category {0:?} appears more than once in palette")]
    DuplicateCategory(String),
}
