//! sheetstyle: deduplicated style catalog for spreadsheet documents
//!
//! Assigns stable small-integer ids to number formats, fonts, fills, borders
//! and composite cell style records (`xf`), and resolves a style id back into
//! the merged formatting it stands for.

pub mod border;
pub mod color;
pub mod config;
pub mod error;
pub mod fill;
pub mod font;
pub mod manager;
pub mod model;
pub mod numfmt;
pub mod registry;
pub mod xf;

mod xml;

pub use border::{BorderDescriptor, BorderEdge, BorderStyle};
pub use color::Color;
pub use config::StyleConfig;
pub use error::{ComponentKind, StyleError};
pub use fill::{FillDescriptor, PatternType};
pub use font::{FontDescriptor, FontScheme, Underline, VertAlign};
pub use manager::StyleManager;
pub use model::{StyleModel, StyleModelResolver, StyleSources};
pub use numfmt::{CUSTOM_NUM_FMT_START, NumFmt, NumberFormatTable};
pub use registry::{BorderRegistry, CanonicalSignature, FillRegistry, FontRegistry, Registry};
pub use xf::{CellStyleIndex, CellXf, InsertMode};
