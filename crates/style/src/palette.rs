//! Category palette
//!
//! Maps a [`CategoryId`] to the [`Style`] it is drawn with. Lookups never
//! fail: unknown categories get the fallback style.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use campus_core::CategoryId;

use crate::color::{Color, Icon};
use crate::StyleError;

/// Presentation attributes for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Card color
    pub color: Color,
    /// Card icon
    pub icon: Icon,
}

impl Style {
    /// Build a style from already-validated parts
    pub fn new(color: Color, icon: Icon) -> Self {
        Style { color, icon }
    }
}

/// Unvalidated palette as read from configuration
///
/// Category keys are validated and normalized by [`Palette::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    /// Style for categories with no entry
    #[serde(default)]
    pub fallback: Option<Style>,
    /// Per-category styles, keyed by category slug
    #[serde(default)]
    pub categories: BTreeMap<String, Style>,
}

/// Category → style lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    styles: HashMap<CategoryId, Style>,
    fallback: Style,
}

impl Palette {
    /// Palette with only a fallback style
    pub fn new(fallback: Style) -> Self {
        Palette {
            styles: HashMap::new(),
            fallback,
        }
    }

    /// Add or replace the style of a category
    pub fn with_style(mut self, category: CategoryId, style: Style) -> Self {
        self.styles.insert(category, style);
        self
    }

    /// Validate configured entries on top of the built-in palette
    ///
    /// Configured categories replace built-in ones with the same id; a
    /// configured fallback replaces the built-in fallback.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::InvalidCategory` for a key that is not a valid
    /// category slug, and `StyleError::DuplicateCategory` when two keys
    /// normalize to the same slug (`CS` and `cs`).
    pub fn from_config(config: PaletteConfig) -> Result<Self, StyleError> {
        let mut palette = Palette::default();
        if let Some(fallback) = config.fallback {
            palette.fallback = fallback;
        }
        let mut configured = HashSet::new();
        for (key, style) in config.categories {
            let id = CategoryId::new(&key).map_err(|_| StyleError::InvalidCategory(key.clone()))?;
            if !configured.insert(id.clone()) {
                return Err(StyleError::DuplicateCategory(key));
            }
            if palette.styles.insert(id, style).is_some() {
                tracing::debug!(target: "campus::style", category = %key, "overriding built-in style");
            }
        }
        Ok(palette)
    }

    /// Style of `category`, or the fallback
    pub fn style_for(&self, category: &CategoryId) -> &Style {
        self.styles.get(category).unwrap_or(&self.fallback)
    }

    /// Whether `category` has its own entry
    pub fn contains(&self, category: &CategoryId) -> bool {
        self.styles.contains_key(category)
    }

    /// Fallback style
    pub fn fallback(&self) -> &Style {
        &self.fallback
    }

    /// Number of categories with their own entry
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no category has its own entry
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Built-in category styles
const BUILTIN: &[(&str, Color, &str)] = &[
    ("cs", Color::rgb(0x3f, 0x51, 0xb5), "terminal"),
    ("math", Color::rgb(0x00, 0x96, 0x88), "function"),
    ("bio", Color::rgb(0x4c, 0xaf, 0x50), "dna"),
    ("chem", Color::rgb(0xff, 0x98, 0x00), "flask"),
    ("physics", Color::rgb(0x67, 0x3a, 0xb7), "atom"),
    ("humanities", Color::rgb(0x79, 0x55, 0x48), "book-open"),
];

const FALLBACK: (Color, &str) = (Color::rgb(0x9e, 0x9e, 0x9e), "book");

fn builtin_style(color: Color, icon: &str) -> Style {
    Style {
        color,
        icon: Icon(icon.to_string()),
    }
}

impl Default for Palette {
    fn default() -> Self {
        let styles = BUILTIN
            .iter()
            .filter_map(|(id, color, icon)| {
                CategoryId::new(id)
                    .ok()
                    .map(|id| (id, builtin_style(*color, icon)))
            })
            .collect();
        Palette {
            styles,
            fallback: builtin_style(FALLBACK.0, FALLBACK.1),
        }
    }
}
