use crate::page::page_model::FieldId;

/// Pre-fill state of one field: a string for text-like controls and selects,
/// a checked flag for checkboxes and radios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// The Original-Value Snapshot: field handle → value at fill time.
///
/// Single-generation store with an explicit lifecycle: each fill pass begins
/// by clearing it, each clear pass consumes and empties it. Owned by one
/// engine instance, so independent engines (one per tab/frame) never collide.
/// Entries keep locator-yield order.
#[derive(Debug, Default)]
pub struct OriginalValues {
    entries: Vec<(FieldId, FieldValue)>,
}

impl OriginalValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation; any previous snapshot is discarded.
    pub fn begin_fill_pass(&mut self) {
        self.entries.clear();
    }

    /// Record a field's pre-fill state. Last write wins for a repeated
    /// handle, though the locator never yields duplicates.
    pub fn record(&mut self, field: FieldId, value: FieldValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(h, _)| *h == field) {
            entry.1 = value;
        } else {
            self.entries.push((field, value));
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(h, _)| *h == field)
            .map(|(_, v)| v)
    }

    /// Drain the snapshot for a clear pass, leaving it empty. A field absent
    /// from the returned entries cannot be restored.
    pub fn consume_for_clear(&mut self) -> Vec<(FieldId, FieldValue)> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
