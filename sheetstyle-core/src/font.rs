//! Font descriptors

use crate::color::{Color, is_false};
use crate::registry::CanonicalSignature;
use crate::xml::{Attributes, FragmentWriter, signature_from};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Theme font scheme a font belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScheme {
    Major,
    Minor,
    None,
}

impl FontScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontScheme::Major => "major",
            FontScheme::Minor => "minor",
            FontScheme::None => "none",
        }
    }
}

/// Underline variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Underline {
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

impl Underline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Underline::Single => "single",
            Underline::Double => "double",
            Underline::SingleAccounting => "singleAccounting",
            Underline::DoubleAccounting => "doubleAccounting",
        }
    }
}

/// Vertical position of the text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertAlign {
    Superscript,
    Subscript,
    Baseline,
}

impl VertAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertAlign::Superscript => "superscript",
            VertAlign::Subscript => "subscript",
            VertAlign::Baseline => "baseline",
        }
    }
}

/// Font attributes of a cell style.
///
/// Unset attributes are left out of both the signature and the serialized
/// form, so `{size: 11}` and `{size: 11, bold: false}` are the same font.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    /// Size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<FontScheme>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub outline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub shadow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vert_align: Option<VertAlign>,
}

impl FontDescriptor {
    /// Baseline font of a new workbook: Calibri 11, theme text color
    pub fn workbook_default() -> Self {
        Self {
            size: Some(11.0),
            color: Some(Color::theme(1)),
            name: Some("Calibri".to_string()),
            family: Some(2),
            scheme: Some(FontScheme::Minor),
            ..Default::default()
        }
    }

    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `<font>` element with children in `CT_Font` order
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = FragmentWriter::new();
        writer.start("font", &Attributes::new())?;

        if self.bold {
            writer.empty("b", &Attributes::new())?;
        }
        if self.italic {
            writer.empty("i", &Attributes::new())?;
        }
        if self.strike {
            writer.empty("strike", &Attributes::new())?;
        }
        if self.outline {
            writer.empty("outline", &Attributes::new())?;
        }
        if self.shadow {
            writer.empty("shadow", &Attributes::new())?;
        }
        match self.underline {
            Some(Underline::Single) => writer.empty("u", &Attributes::new())?,
            Some(underline) => writer.val("u", underline.as_str())?,
            None => {}
        }
        if let Some(vert_align) = self.vert_align {
            writer.val("vertAlign", vert_align.as_str())?;
        }
        if let Some(size) = self.size {
            writer.val("sz", size)?;
        }
        if let Some(color) = &self.color {
            writer.empty("color", &color.xml_attributes())?;
        }
        if let Some(name) = &self.name {
            writer.val("name", name)?;
        }
        if let Some(family) = self.family {
            writer.val("family", family)?;
        }
        if let Some(charset) = self.charset {
            writer.val("charset", charset)?;
        }
        if let Some(scheme) = self.scheme {
            writer.val("scheme", scheme.as_str())?;
        }

        writer.end("font")?;
        writer.finish()
    }
}

impl CanonicalSignature for FontDescriptor {
    fn signature(&self) -> String {
        signature_from(self.to_xml())
    }
}
