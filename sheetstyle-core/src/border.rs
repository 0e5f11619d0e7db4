//! Border descriptors

use crate::color::{Color, is_false};
use crate::registry::CanonicalSignature;
use crate::xml::{Attributes, FragmentWriter, signature_from};
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    Thin,
    Medium,
    Dashed,
    Dotted,
    Thick,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Thin => "thin",
            BorderStyle::Medium => "medium",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Thick => "thick",
            BorderStyle::Double => "double",
            BorderStyle::Hair => "hair",
            BorderStyle::MediumDashed => "mediumDashed",
            BorderStyle::DashDot => "dashDot",
            BorderStyle::MediumDashDot => "mediumDashDot",
            BorderStyle::DashDotDot => "dashDotDot",
            BorderStyle::MediumDashDotDot => "mediumDashDotDot",
            BorderStyle::SlantDashDot => "slantDashDot",
        }
    }
}

/// One side of a border
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BorderEdge {
    pub fn new(style: BorderStyle) -> Self {
        Self {
            style: Some(style),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.color.is_none()
    }

    fn write_xml(&self, writer: &mut FragmentWriter, name: &str) -> Result<()> {
        let mut attributes = Attributes::new();
        if let Some(style) = self.style {
            attributes.push(("style", style.as_str().to_string()));
        }
        match &self.color {
            Some(color) => {
                writer.start(name, &attributes)?;
                writer.empty("color", &color.xml_attributes())?;
                writer.end(name)
            }
            None => writer.empty(name, &attributes),
        }
    }
}

/// Cell border
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderDescriptor {
    #[serde(default, skip_serializing_if = "BorderEdge::is_empty")]
    pub left: BorderEdge,
    #[serde(default, skip_serializing_if = "BorderEdge::is_empty")]
    pub right: BorderEdge,
    #[serde(default, skip_serializing_if = "BorderEdge::is_empty")]
    pub top: BorderEdge,
    #[serde(default, skip_serializing_if = "BorderEdge::is_empty")]
    pub bottom: BorderEdge,
    #[serde(default, skip_serializing_if = "BorderEdge::is_empty")]
    pub diagonal: BorderEdge,
    #[serde(default, skip_serializing_if = "is_false")]
    pub diagonal_up: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub diagonal_down: bool,
}

impl BorderDescriptor {
    /// Same edge on all four sides
    pub fn outline(edge: BorderEdge) -> Self {
        Self {
            left: edge.clone(),
            right: edge.clone(),
            top: edge.clone(),
            bottom: edge,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `<border>` element with edges in `CT_Border` order
    pub fn to_xml(&self) -> Result<String> {
        let mut attributes = Attributes::new();
        if self.diagonal_up {
            attributes.push(("diagonalUp", "1".to_string()));
        }
        if self.diagonal_down {
            attributes.push(("diagonalDown", "1".to_string()));
        }

        let mut writer = FragmentWriter::new();
        writer.start("border", &attributes)?;
        self.left.write_xml(&mut writer, "left")?;
        self.right.write_xml(&mut writer, "right")?;
        self.top.write_xml(&mut writer, "top")?;
        self.bottom.write_xml(&mut writer, "bottom")?;
        self.diagonal.write_xml(&mut writer, "diagonal")?;
        writer.end("border")?;
        writer.finish()
    }
}

impl CanonicalSignature for BorderDescriptor {
    fn signature(&self) -> String {
        signature_from(self.to_xml())
    }
}
