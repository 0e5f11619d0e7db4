//! Pattern fill descriptors

use crate::color::Color;
use crate::registry::CanonicalSignature;
use crate::xml::{Attributes, FragmentWriter, signature_from};
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternType {
    #[default]
    None,
    Solid,
    MediumGray,
    DarkGray,
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    Gray125,
    Gray0625,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::None => "none",
            PatternType::Solid => "solid",
            PatternType::MediumGray => "mediumGray",
            PatternType::DarkGray => "darkGray",
            PatternType::LightGray => "lightGray",
            PatternType::DarkHorizontal => "darkHorizontal",
            PatternType::DarkVertical => "darkVertical",
            PatternType::DarkDown => "darkDown",
            PatternType::DarkUp => "darkUp",
            PatternType::DarkGrid => "darkGrid",
            PatternType::DarkTrellis => "darkTrellis",
            PatternType::LightHorizontal => "lightHorizontal",
            PatternType::LightVertical => "lightVertical",
            PatternType::LightDown => "lightDown",
            PatternType::LightUp => "lightUp",
            PatternType::LightGrid => "lightGrid",
            PatternType::LightTrellis => "lightTrellis",
            PatternType::Gray125 => "gray125",
            PatternType::Gray0625 => "gray0625",
        }
    }
}

/// Background fill of a cell style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillDescriptor {
    #[serde(default)]
    pub pattern_type: PatternType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
}

impl FillDescriptor {
    /// Solid fill with the given foreground color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern_type: PatternType::Solid,
            fg_color: Some(color),
            bg_color: None,
        }
    }

    pub fn pattern(pattern_type: PatternType) -> Self {
        Self {
            pattern_type,
            ..Default::default()
        }
    }

    /// No pattern and no colors
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut writer = FragmentWriter::new();
        writer.start("fill", &Attributes::new())?;

        let pattern = vec![("patternType", self.pattern_type.as_str().to_string())];
        if self.fg_color.is_none() && self.bg_color.is_none() {
            writer.empty("patternFill", &pattern)?;
        } else {
            writer.start("patternFill", &pattern)?;
            if let Some(color) = &self.fg_color {
                writer.empty("fgColor", &color.xml_attributes())?;
            }
            if let Some(color) = &self.bg_color {
                writer.empty("bgColor", &color.xml_attributes())?;
            }
            writer.end("patternFill")?;
        }

        writer.end("fill")?;
        writer.finish()
    }
}

impl CanonicalSignature for FillDescriptor {
    fn signature(&self) -> String {
        signature_from(self.to_xml())
    }
}
