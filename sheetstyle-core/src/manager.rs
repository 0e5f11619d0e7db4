//! Style catalog of one document

use crate::border::BorderDescriptor;
use crate::config::StyleConfig;
use crate::error::{ComponentKind, StyleError};
use crate::fill::FillDescriptor;
use crate::font::FontDescriptor;
use crate::model::{StyleModel, StyleModelResolver, StyleSources};
use crate::numfmt::builtin::is_reserved_id;
use crate::numfmt::{NumFmt, NumberFormatTable};
use crate::registry::{BorderRegistry, FillRegistry, FontRegistry, position_id};
use crate::xf::{CellStyleIndex, CellXf, InsertMode};

/// Owns every style table of a document being built or parsed.
///
/// Register fonts, fills, borders and number formats first, then the cell
/// style records that reference their ids. On construction the manager seeds
/// font, fill and border 0 from the configuration and the all-zero record as
/// style 0, so a fresh catalog is always valid.
#[derive(Debug, Clone)]
pub struct StyleManager {
    cell_xfs: CellStyleIndex,
    num_fmts: NumberFormatTable,
    fonts: FontRegistry,
    fills: FillRegistry,
    borders: BorderRegistry,
    resolver: StyleModelResolver,
}

impl StyleManager {
    /// Create a catalog seeded with the workbook defaults
    pub fn new() -> Self {
        Self::with_config(StyleConfig::default())
    }

    /// Create a catalog seeded from a configuration
    pub fn with_config(config: StyleConfig) -> Self {
        let mut manager = Self {
            cell_xfs: CellStyleIndex::new(),
            num_fmts: NumberFormatTable::new(),
            fonts: FontRegistry::new(),
            fills: FillRegistry::new(),
            borders: BorderRegistry::new(),
            resolver: StyleModelResolver::new(),
        };

        manager.add_font(config.default_font);
        manager.add_fill(config.default_fill);
        manager.add_border(config.default_border);
        manager.add_xf(CellXf::default(), InsertMode::Deduplicate);

        tracing::debug!(
            "Style catalog initialized with default font {:?}",
            manager.fonts.get(0).and_then(|font| font.name.as_deref())
        );
        manager
    }

    // Fonts, fills and borders

    pub fn add_font(&mut self, font: FontDescriptor) -> u32 {
        self.fonts.add(font)
    }

    pub fn add_fill(&mut self, fill: FillDescriptor) -> u32 {
        self.fills.add(fill)
    }

    pub fn add_border(&mut self, border: BorderDescriptor) -> u32 {
        self.borders.add(border)
    }

    pub fn font(&self, id: u32) -> Option<&FontDescriptor> {
        self.fonts.get(id)
    }

    pub fn fill(&self, id: u32) -> Option<&FillDescriptor> {
        self.fills.get(id)
    }

    pub fn border(&self, id: u32) -> Option<&BorderDescriptor> {
        self.borders.get(id)
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn fills(&self) -> &FillRegistry {
        &self.fills
    }

    pub fn borders(&self) -> &BorderRegistry {
        &self.borders
    }

    // Number formats

    /// Id to place into [`CellXf::num_fmt_id`] for a format code
    pub fn add_num_fmt_str(&mut self, format_code: &str) -> u32 {
        self.num_fmts.add_format_code(format_code)
    }

    /// Ingest a `numFmt` read from an existing file, keeping its id
    pub fn add_parsed_num_fmt(&mut self, num_fmt: NumFmt) {
        self.num_fmts.add_parsed(num_fmt.id, num_fmt.format_code);
    }

    pub fn num_fmt_code(&self, id: u32) -> Option<&str> {
        self.num_fmts.format_code(id)
    }

    /// Custom number formats in registration order
    pub fn num_fmts(&self) -> &[NumFmt] {
        self.num_fmts.entries()
    }

    // Cell style records

    /// Register a cell style record and return its style id.
    ///
    /// Use [`InsertMode::Preserve`] when replaying records from a file so each
    /// record keeps its original position.
    pub fn add_xf(&mut self, xf: CellXf, mode: InsertMode) -> u32 {
        self.cell_xfs.add(xf, mode)
    }

    pub fn xf(&self, id: u32) -> Option<&CellXf> {
        self.cell_xfs.get(id)
    }

    pub fn cell_xfs(&self) -> &CellStyleIndex {
        &self.cell_xfs
    }

    /// Merged formatting of a style id, `None` for ids never handed out
    pub fn style_model(&mut self, id: u32) -> Option<&StyleModel> {
        let sources = StyleSources {
            cell_xfs: &self.cell_xfs,
            num_fmts: &self.num_fmts,
            fonts: &self.fonts,
            fills: &self.fills,
            borders: &self.borders,
        };
        self.resolver.resolve(id, &sources)
    }

    /// Check that every record only references ids that resolve.
    ///
    /// Any id in the reserved built-in range counts as resolvable, including
    /// locale dependent formats without a listed code.
    ///
    /// Registration never checks references, so run this before emitting a
    /// catalog assembled from untrusted ids.
    pub fn validate(&self) -> Result<(), StyleError> {
        for (style_id, xf) in self.cell_xfs.iter().enumerate() {
            let style_id = position_id(style_id);
            let checks = [
                (
                    ComponentKind::NumFmt,
                    xf.num_fmt_id,
                    self.num_fmts.format_code(xf.num_fmt_id).is_some()
                        || is_reserved_id(xf.num_fmt_id),
                ),
                (
                    ComponentKind::Font,
                    xf.font_id,
                    self.fonts.get(xf.font_id).is_some(),
                ),
                (
                    ComponentKind::Fill,
                    xf.fill_id,
                    self.fills.get(xf.fill_id).is_some(),
                ),
                (
                    ComponentKind::Border,
                    xf.border_id,
                    self.borders.get(xf.border_id).is_some(),
                ),
            ];

            if let Some((kind, id, _)) = checks.into_iter().find(|(_, _, found)| !found) {
                return Err(StyleError::DanglingReference { style_id, kind, id });
            }
        }
        Ok(())
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new()
    }
}
