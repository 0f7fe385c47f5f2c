//! Scan state tracking.
//!
//! The page lists a language section's headings, paragraphs and lists as
//! siblings, so the owning heading of a list is whatever category heading was
//! seen last. `EntryScan` holds that context: either no entry is open, or one
//! entry is collecting gender and definitions until the next heading closes it.

use crate::result::{Category, Entry, Gender};

/// Entry under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenEntry {
    /// Raw sub-heading label.
    pub label: String,

    /// Gender from the last marker seen, `Gender::None` until then.
    pub gender: Gender,

    /// Definitions collected so far, in list order.
    pub definitions: Vec<String>,
}

impl OpenEntry {
    /// Whether closing this entry keeps it.
    ///
    /// An entry needs a label and at least one definition.
    #[must_use]
    pub fn is_retained(&self) -> bool {
        !self.label.is_empty() && !self.definitions.is_empty()
    }

    fn into_entry(self) -> Entry {
        Entry {
            category: Category::from_label(&self.label),
            gender: self.gender,
            definitions: self.definitions,
        }
    }
}

/// Whether an entry is currently open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Before the first category heading.
    #[default]
    Idle,
    Open(OpenEntry),
}

/// Accumulates entries over one pass through a language section.
#[derive(Debug, Default)]
pub struct EntryScan {
    state: ScanState,
    entries: Vec<Entry>,
}

impl EntryScan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Entries closed so far.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Close the open entry, if any, and open a new one for `label`.
    pub fn open(&mut self, label: String) {
        self.close();
        self.state = ScanState::Open(OpenEntry {
            label,
            ..OpenEntry::default()
        });
    }

    /// Record the gender of the open entry.
    ///
    /// Returns `false` when no entry is open and the gender is discarded.
    pub fn set_gender(&mut self, gender: Gender) -> bool {
        match &mut self.state {
            ScanState::Open(entry) => {
                entry.gender = gender;
                true
            }
            ScanState::Idle => false,
        }
    }

    /// Append definitions to the open entry.
    ///
    /// Returns `false` when no entry is open and the definitions are discarded.
    pub fn add_definitions(&mut self, definitions: impl IntoIterator<Item = String>) -> bool {
        match &mut self.state {
            ScanState::Open(entry) => {
                entry.definitions.extend(definitions);
                true
            }
            ScanState::Idle => false,
        }
    }

    /// Close the open entry, keeping it only if it is retained.
    pub fn close(&mut self) {
        if let ScanState::Open(entry) = std::mem::take(&mut self.state) {
            if entry.is_retained() {
                self.entries.push(entry.into_entry());
            } else {
                tracing::debug!(label = %entry.label, "dropping entry without definitions");
            }
        }
    }

    /// Close any open entry and return everything collected.
    #[must_use]
    pub fn finish(mut self) -> Vec<Entry> {
        self.close();
        self.entries
    }
}
