//! Cell style records (`xf`) and their deduplicating index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::registry::position_id;

/// Composite cell style record.
///
/// Every field is an id into its own table: number formats, fonts, fills,
/// borders, and the named cell style it inherits from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellXf {
    pub num_fmt_id: u32,
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    pub xf_id: u32,
}

/// Dedup key of a [`CellXf`]: all five fields, in declaration order
pub type XfKey = (u32, u32, u32, u32, u32);

impl CellXf {
    pub fn new(num_fmt_id: u32, font_id: u32, fill_id: u32, border_id: u32, xf_id: u32) -> Self {
        Self {
            num_fmt_id,
            font_id,
            fill_id,
            border_id,
            xf_id,
        }
    }

    pub fn key(&self) -> XfKey {
        (
            self.num_fmt_id,
            self.font_id,
            self.fill_id,
            self.border_id,
            self.xf_id,
        )
    }
}

/// How [`CellStyleIndex::add`] treats a record whose key is already known
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertMode {
    /// Reuse the id of an identical record
    #[default]
    Deduplicate,
    /// Always append, keeping the record at the next position. Used when
    /// replaying records read from a file, where position is the id.
    Preserve,
}

/// Append-only list of cell style records; the id of a record is its position
#[derive(Debug, Clone, Default)]
pub struct CellStyleIndex {
    records: Vec<CellXf>,
    index: HashMap<XfKey, u32>,
}

impl CellStyleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// When the index already holds more than `u32::MAX` records.
    pub fn add(&mut self, xf: CellXf, mode: InsertMode) -> u32 {
        let key = xf.key();
        let existing = self.index.get(&key).copied();
        if let (Some(id), InsertMode::Deduplicate) = (existing, mode) {
            return id;
        }

        let id = position_id(self.records.len());
        self.records.push(xf);
        if let Some(shadowed) = self.index.insert(key, id) {
            tracing::debug!(
                "Preserved duplicate cell xf {} (same key as {}): {:?}",
                id,
                shadowed,
                key
            );
        }
        id
    }

    pub fn get(&self, id: u32) -> Option<&CellXf> {
        self.records.get(id as usize)
    }

    /// Id mapped to the record's key, the newest one when duplicates exist
    pub fn lookup(&self, xf: &CellXf) -> Option<u32> {
        self.index.get(&xf.key()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellXf> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
