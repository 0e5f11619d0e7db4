//! Color references shared by fonts, fills and borders

use crate::xml::Attributes;
use serde::{Deserialize, Serialize};

/// A SpreadsheetML color reference.
///
/// Any combination may be set, though files usually carry exactly one of
/// `argb`, `theme` or `indexed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    #[serde(default, skip_serializing_if = "is_false")]
    pub auto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<u32>,
    /// `AARRGGBB` hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<f64>,
}

impl Color {
    pub fn argb(argb: impl Into<String>) -> Self {
        Self {
            argb: Some(argb.into()),
            ..Default::default()
        }
    }

    pub fn theme(theme: u32) -> Self {
        Self {
            theme: Some(theme),
            ..Default::default()
        }
    }

    pub fn indexed(indexed: u32) -> Self {
        Self {
            indexed: Some(indexed),
            ..Default::default()
        }
    }

    pub fn with_tint(mut self, tint: f64) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.auto
            && self.indexed.is_none()
            && self.argb.is_none()
            && self.theme.is_none()
            && self.tint.is_none()
    }

    /// Attributes in `CT_Color` order
    pub(crate) fn xml_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        if self.auto {
            attributes.push(("auto", "1".to_string()));
        }
        if let Some(indexed) = self.indexed {
            attributes.push(("indexed", indexed.to_string()));
        }
        if let Some(argb) = &self.argb {
            attributes.push(("rgb", argb.clone()));
        }
        if let Some(theme) = self.theme {
            attributes.push(("theme", theme.to_string()));
        }
        if let Some(tint) = self.tint {
            attributes.push(("tint", tint.to_string()));
        }
        attributes
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
