//! Entry filtering.
//!
//! Sections such as Etymology, Pronunciation and Derived terms use the same
//! heading level as the parts of speech, so the scan turns them into entries
//! too. The filter keeps only entries whose category is a part of speech.

use crate::result::Entry;

/// Keep entries whose category is a part of speech, in their original order.
///
/// Dropped labels are logged so that new kinds of non-lexical sections can be
/// spotted.
#[must_use]
pub fn filter_entries(entries: Vec<Entry>) -> Vec<Entry> {
    let (kept, unrecognized) = partition_entries(entries);
    for label in &unrecognized {
        tracing::info!(category = %label, "unrecognised entry type");
    }
    kept
}

/// Split entries into kept entries and the labels of the dropped ones.
#[must_use]
pub fn partition_entries(entries: Vec<Entry>) -> (Vec<Entry>, Vec<String>) {
    let mut kept = Vec::with_capacity(entries.len());
    let mut unrecognized = Vec::new();

    for entry in entries {
        if entry.category.part_of_speech().is_some() {
            kept.push(entry);
        } else {
            unrecognized.push(entry.category.label().to_string());
        }
    }

    (kept, unrecognized)
}
