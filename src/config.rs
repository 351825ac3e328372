//! Campus configuration
//!
//! Read from TOML. Every section is optional:
//!
//! ```toml
//! [search]
//! fields = ["name", "code"]
//!
//! [style.fallback]
//! color = "#9e9e9e"
//! icon = "book"
//!
//! [style.categories.cs]
//! color = "#3f51b5"
//! icon = "terminal"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use campus_core::FieldSet;
use campus_style::{Palette, PaletteConfig};

use crate::error::{Error, Result};

/// Search settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Fields every course is searched by (defaults to name only)
    #[serde(default)]
    pub fields: FieldSet,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampusConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Category styles layered over the built-in palette
    #[serde(default)]
    pub style: PaletteConfig,
}

impl CampusConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = CampusConfig::from_toml_str(&text)?;
        tracing::debug!(
            target: "campus::config",
            path = %path.display(),
            fields = %config.search.fields,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Validate the style section into a palette
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette::from_config(self.style.clone())?)
    }
}
