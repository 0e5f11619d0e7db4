//! Merged, memoized view of a cell style

use serde::Serialize;
use std::collections::HashMap;

use crate::border::BorderDescriptor;
use crate::fill::FillDescriptor;
use crate::font::FontDescriptor;
use crate::numfmt::{GENERAL_NUM_FMT_ID, NumberFormatTable};
use crate::registry::{BorderRegistry, FillRegistry, FontRegistry};
use crate::xf::CellStyleIndex;

/// Effective formatting of one style id.
///
/// A component is present only when its id resolves and carries something
/// beyond the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_fmt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderDescriptor>,
}

impl StyleModel {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Tables a model is assembled from
#[derive(Debug, Clone, Copy)]
pub struct StyleSources<'a> {
    pub cell_xfs: &'a CellStyleIndex,
    pub num_fmts: &'a NumberFormatTable,
    pub fonts: &'a FontRegistry,
    pub fills: &'a FillRegistry,
    pub borders: &'a BorderRegistry,
}

/// Builds [`StyleModel`]s on first request and keeps them.
///
/// Nothing is ever evicted: records and descriptors are append-only, so a
/// model computed once stays correct for the lifetime of the catalog.
#[derive(Debug, Clone, Default)]
pub struct StyleModelResolver {
    models: HashMap<u32, StyleModel>,
}

impl StyleModelResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model of a style id, `None` when the id was never handed out
    pub fn resolve(&mut self, id: u32, sources: &StyleSources<'_>) -> Option<&StyleModel> {
        if !self.models.contains_key(&id) {
            tracing::trace!("Style model cache miss for style {}", id);
            let model = build_model(id, sources)?;
            self.models.insert(id, model);
        }
        self.models.get(&id)
    }

    /// Number of models computed so far
    pub fn cached_len(&self) -> usize {
        self.models.len()
    }
}

fn build_model(id: u32, sources: &StyleSources<'_>) -> Option<StyleModel> {
    let xf = sources.cell_xfs.get(id)?;
    let mut model = StyleModel::default();

    if xf.num_fmt_id != GENERAL_NUM_FMT_ID {
        model.num_fmt = sources
            .num_fmts
            .format_code(xf.num_fmt_id)
            .map(str::to_string);
    }

    model.font = sources
        .fonts
        .get(xf.font_id)
        .filter(|font| !font.is_empty())
        .cloned();

    model.fill = sources
        .fills
        .get(xf.fill_id)
        .filter(|fill| !fill.is_empty())
        .cloned();

    model.border = sources
        .borders
        .get(xf.border_id)
        .filter(|border| !border.is_empty())
        .cloned();

    Some(model)
}
