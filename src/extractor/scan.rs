//! Language section scan.
//!
//! Walks the siblings that follow the target language heading once, in
//! document order, feeding each classified node to an [`EntryScan`].

use crate::dom::{self, Document, Selection};
use crate::result::{Entry, Word};
use crate::{Error, Options, Result};

use super::classify::{Classifier, NodeKind};
use super::state::EntryScan;
use super::tags::HEADWORD_TAG;

/// Extract the word and its raw (unfiltered) entries from a parsed page.
///
/// Fails with [`Error::HeadwordNotFound`] when the page has no non-empty
/// `<h1>` and with [`Error::SectionNotFound`] when the language heading is
/// missing. Structural oddities inside the section are skipped, never fatal.
#[tracing::instrument(skip_all, fields(language = %options.language))]
pub fn extract_word(doc: &Document, options: &Options) -> Result<Word> {
    let classifier = Classifier::new(options)?;

    let name = headword(doc)?;
    let origin = section_origin(doc, &classifier)?;
    let entries = scan_section(&origin, &classifier);

    tracing::debug!(word = %name, entries = entries.len(), "scanned language section");

    Ok(Word { name, entries })
}

/// Text of the page's primary heading.
fn headword(doc: &Document) -> Result<String> {
    dom::first_by_tag(doc, HEADWORD_TAG)
        .map(|heading| dom::text_content(&heading).trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(Error::HeadwordNotFound)
}

/// Container of the language heading; the scan starts after it.
fn section_origin<'a>(doc: &'a Document, classifier: &Classifier) -> Result<Selection<'a>> {
    classifier
        .find_language_heading(doc)
        .map(|heading| dom::parent(&heading))
        .filter(|container| !container.is_empty())
        .ok_or_else(|| Error::SectionNotFound {
            language: classifier.language().to_string(),
        })
}

/// Scan the siblings after `origin` until another language section starts.
#[must_use]
pub fn scan_section(origin: &Selection, classifier: &Classifier) -> Vec<Entry> {
    let mut scan = EntryScan::new();

    for node in dom::following_siblings(origin) {
        match classifier.classify(&node) {
            NodeKind::CategoryHeading(label) => scan.open(label),
            NodeKind::SectionHeading(language) => {
                if !classifier.is_target_language(&language) {
                    tracing::debug!(%language, "found another language, stopping");
                    break;
                }
            }
            NodeKind::Malformed => {
                tracing::debug!(
                    tag = ?dom::tag_name(&node),
                    "heading wrapper without heading, skipping"
                );
            }
            NodeKind::Paragraph(Some(gender)) => {
                scan.set_gender(gender);
            }
            NodeKind::DefinitionList(definitions) => {
                scan.add_definitions(definitions);
            }
            NodeKind::Paragraph(None) | NodeKind::Other => {}
        }
    }

    scan.finish()
}
