//! Signature-deduplicated, append-only descriptor tables

use std::collections::HashMap;
use std::fmt::Debug;

use crate::border::BorderDescriptor;
use crate::fill::FillDescriptor;
use crate::font::FontDescriptor;

/// Deterministic encoding of every attribute that defines a descriptor.
///
/// Two descriptors with equal signatures are the same catalog entry.
pub trait CanonicalSignature {
    fn signature(&self) -> String;
}

/// Id of the entry about to be stored at position `len`.
///
/// # Panics
///
/// Ids are unsigned 32-bit like the indexes they end up as in `styles.xml`,
/// so a table holding `u32::MAX + 1` entries cannot hand out another one.
pub(crate) fn position_id(len: usize) -> u32 {
    u32::try_from(len).expect("style table exceeds u32::MAX entries")
}

/// Append-only table where the id of an entry is its position
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<String, u32>,
}

pub type FontRegistry = Registry<FontDescriptor>;
pub type FillRegistry = Registry<FillDescriptor>;
pub type BorderRegistry = Registry<BorderDescriptor>;

impl<T: CanonicalSignature + Debug> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a descriptor, reusing the id of an identical one.
    ///
    /// # Panics
    ///
    /// When the table already holds more than `u32::MAX` entries.
    pub fn add(&mut self, descriptor: T) -> u32 {
        let signature = descriptor.signature();
        if let Some(&id) = self.index.get(&signature) {
            return id;
        }

        let id = position_id(self.entries.len());
        tracing::debug!("Registered {:?} as id {}", descriptor, id);
        self.entries.push(descriptor);
        self.index.insert(signature, id);
        id
    }

    /// Id of an already registered descriptor with the same signature
    pub fn id_of(&self, descriptor: &T) -> Option<u32> {
        self.index.get(&descriptor.signature()).copied()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.entries.get(id as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: CanonicalSignature + Debug> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
