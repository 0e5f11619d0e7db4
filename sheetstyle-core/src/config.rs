//! Configuration of the catalog's seeded defaults

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::border::BorderDescriptor;
use crate::fill::FillDescriptor;
use crate::font::FontDescriptor;

/// Catalog configuration.
///
/// The defaults become id 0 of their tables and are referenced by the
/// all-zero cell style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "FontDescriptor::workbook_default")]
    pub default_font: FontDescriptor,
    #[serde(default)]
    pub default_fill: FillDescriptor,
    #[serde(default)]
    pub default_border: BorderDescriptor,
}

impl StyleConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StyleConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Check that the baseline font is usable
    pub fn validate(&self) -> Result<()> {
        match self.default_font.name.as_deref() {
            None => anyhow::bail!("Configuration error: default_font requires a name"),
            Some(name) if name.trim().is_empty() => {
                anyhow::bail!("Configuration error: default_font name must not be empty")
            }
            Some(_) => {}
        }

        if let Some(size) = self.default_font.size {
            if size <= 0.0 || size.is_nan() {
                anyhow::bail!(
                    "Configuration error: default_font size must be positive, got {}",
                    size
                );
            }
        }

        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_font: FontDescriptor::workbook_default(),
            default_fill: FillDescriptor::default(),
            default_border: BorderDescriptor::default(),
        }
    }
}
