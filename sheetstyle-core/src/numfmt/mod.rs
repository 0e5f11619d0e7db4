//! Number format table
//!
//! Keeps the custom number formats of one document. Built-in formats are never
//! stored here, they are answered from the [`builtin`] table.

pub mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use builtin::{CUSTOM_NUM_FMT_START, GENERAL_NUM_FMT_ID, builtin_format_code, builtin_format_id};

/// A custom number format definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumFmt {
    pub id: u32,
    pub format_code: String,
}

impl NumFmt {
    pub fn new(id: u32, format_code: impl Into<String>) -> Self {
        Self {
            id,
            format_code: format_code.into(),
        }
    }
}

/// Custom number formats keyed both by id and by format code
#[derive(Debug, Clone)]
pub struct NumberFormatTable {
    /// Entries in registration order
    entries: Vec<NumFmt>,
    /// id -> position in `entries`
    by_id: HashMap<u32, usize>,
    /// format code -> id
    by_code: HashMap<String, u32>,
    next_id: u32,
}

impl NumberFormatTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_id: HashMap::new(),
            by_code: HashMap::new(),
            next_id: CUSTOM_NUM_FMT_START,
        }
    }

    /// Register a format code requested while building a document.
    ///
    /// Built-in codes return their reserved id without touching the table.
    /// Known custom codes return their existing id. Anything else gets the
    /// next free custom id.
    pub fn add_format_code(&mut self, format_code: &str) -> u32 {
        if let Some(id) = builtin_format_id(format_code) {
            return id;
        }

        if let Some(&id) = self.by_code.get(format_code) {
            return id;
        }

        let id = self.allocate_id();
        self.insert(NumFmt::new(id, format_code));
        tracing::debug!("Allocated custom number format {} for {:?}", id, format_code);
        id
    }

    /// Register an entry read back from an existing file.
    ///
    /// The id is trusted as-is. Supplying an id twice is the caller's problem:
    /// the later entry wins the id lookup.
    pub fn add_parsed(&mut self, id: u32, format_code: impl Into<String>) {
        let num_fmt = NumFmt::new(id, format_code);
        tracing::debug!(
            "Ingested parsed number format {} = {:?}",
            num_fmt.id,
            num_fmt.format_code
        );

        if builtin::is_reserved_id(id) {
            tracing::debug!("Parsed number format {} shadows a reserved id", id);
        }

        // Keep allocating above parsed ids
        if id >= self.next_id {
            self.next_id = successor(id);
        }
        self.insert(num_fmt);
    }

    /// First id from the counter on that no entry owns.
    ///
    /// The counter wraps back to the start of the custom range past
    /// `u32::MAX`, so allocation never lands on a reserved id.
    fn allocate_id(&mut self) -> u32 {
        let mut id = self.next_id;
        while self.by_id.contains_key(&id) {
            id = successor(id);
        }
        self.next_id = successor(id);
        id
    }

    fn insert(&mut self, num_fmt: NumFmt) {
        self.by_code
            .entry(num_fmt.format_code.clone())
            .or_insert(num_fmt.id);
        self.by_id.insert(num_fmt.id, self.entries.len());
        self.entries.push(num_fmt);
    }

    /// Resolve an id to its format code, custom entries first
    pub fn format_code(&self, id: u32) -> Option<&str> {
        match self.by_id.get(&id) {
            Some(&index) => Some(self.entries[index].format_code.as_str()),
            None => builtin_format_code(id),
        }
    }

    /// Get the custom entry stored for an id
    pub fn get(&self, id: u32) -> Option<&NumFmt> {
        self.by_id.get(&id).map(|&index| &self.entries[index])
    }

    /// Custom entries in registration order
    pub fn entries(&self) -> &[NumFmt] {
        &self.entries
    }

    /// Id allocation resumes from; skipped when a parsed entry owns it
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn successor(id: u32) -> u32 {
    id.checked_add(1).unwrap_or(CUSTOM_NUM_FMT_START)
}

impl Default for NumberFormatTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_codes_round_trip() {
        let mut table = NumberFormatTable::new();

        let first = table.add_format_code("0.000%");
        let second = table.add_format_code("#,##0.000");
        assert_eq!(first, 164);
        assert_eq!(second, 165);
        assert_eq!(table.format_code(first), Some("0.000%"));
        assert_eq!(table.format_code(second), Some("#,##0.000"));
    }

    #[test]
    fn test_custom_codes_are_idempotent() {
        let mut table = NumberFormatTable::new();

        let id = table.add_format_code("yyyy-mm-dd");
        assert_eq!(table.add_format_code("yyyy-mm-dd"), id);
        assert_eq!(table.len(), 1);
        assert_eq!(table.next_id(), 165);
    }

    #[test]
    fn test_builtin_codes_never_allocate() {
        let mut table = NumberFormatTable::new();

        assert_eq!(table.add_format_code("0.00%"), 10);
        assert_eq!(table.add_format_code("0.00%"), 10);
        assert_eq!(table.add_format_code("General"), 0);
        assert!(table.is_empty());
        assert_eq!(table.next_id(), CUSTOM_NUM_FMT_START);
    }

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        let table = NumberFormatTable::new();

        assert_eq!(table.format_code(14), Some("mm-dd-yy"));
        assert_eq!(table.format_code(5), None);
        assert_eq!(table.format_code(200), None);
    }

    #[test]
    fn test_parsed_entries_keep_their_ids() {
        let mut table = NumberFormatTable::new();

        table.add_parsed(170, "0.0");
        table.add_parsed(165, "0.0000");
        assert_eq!(table.format_code(170), Some("0.0"));
        assert_eq!(table.format_code(165), Some("0.0000"));
        assert_eq!(table.get(170), Some(&NumFmt::new(170, "0.0")));

        // Allocation continues past the highest parsed id
        assert_eq!(table.next_id(), 171);
        assert_eq!(table.add_format_code("0.00000"), 171);

        // Parsed codes are deduplicated against later requests
        assert_eq!(table.add_format_code("0.0000"), 165);
    }

    #[test]
    fn test_parsed_entry_can_override_builtin_id() {
        let mut table = NumberFormatTable::new();

        table.add_parsed(14, "dd/mm/yyyy");
        assert_eq!(table.format_code(14), Some("dd/mm/yyyy"));
        assert_eq!(table.next_id(), CUSTOM_NUM_FMT_START);
    }

    #[test]
    fn test_parsed_max_id_does_not_overflow() {
        let mut table = NumberFormatTable::new();

        table.add_parsed(u32::MAX, "0.0");
        assert_eq!(table.next_id(), CUSTOM_NUM_FMT_START);

        let id = table.add_format_code("0.000");
        assert_eq!(id, CUSTOM_NUM_FMT_START);
        assert_eq!(table.format_code(id), Some("0.000"));
        assert_eq!(table.format_code(u32::MAX), Some("0.0"));
        assert_eq!(table.format_code(0), Some("General"));
    }

    #[test]
    fn test_allocation_wraps_past_taken_ids() {
        let mut table = NumberFormatTable::new();

        table.add_parsed(CUSTOM_NUM_FMT_START, "0.0");
        table.add_parsed(u32::MAX - 1, "0.00000");
        assert_eq!(table.add_format_code("0.000"), u32::MAX);

        // Counter wrapped, 164 is taken so 165 is next
        assert_eq!(table.add_format_code("0.0000"), CUSTOM_NUM_FMT_START + 1);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let mut table = NumberFormatTable::new();

        table.add_parsed(180, "0.0");
        table.add_format_code("0.000");
        let ids: Vec<u32> = table.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![180, 181]);
    }
}
