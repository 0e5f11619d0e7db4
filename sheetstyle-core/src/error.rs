//! Style catalog errors

use std::fmt;
use thiserror::Error;

/// Table a cell style record points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    NumFmt,
    Font,
    Fill,
    Border,
}

impl ComponentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::NumFmt => "number format",
            ComponentKind::Font => "font",
            ComponentKind::Fill => "fill",
            ComponentKind::Border => "border",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("cell style {style_id} references unknown {kind} id {id}")]
    DanglingReference {
        style_id: u32,
        kind: ComponentKind,
        id: u32,
    },
}
