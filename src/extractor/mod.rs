//! Entry extraction module.
//!
//! # Module Structure
//!
//! - `tags`: Tag and heading-class constants for Wiktionary markup
//! - `classify`: Sorting sibling nodes into headings, paragraphs and lists
//! - `state`: The open-entry state machine driven by the scan
//! - `scan`: The single pass over the language section
//! - `filter`: Dropping entries that are not parts of speech
//!
//! # Usage
//!
//! ```rust
//! use mot_du_jour::{dom, Options};
//! use mot_du_jour::extractor::{extract_word, filter_entries};
//!
//! let html = r#"<h1>chat</h1><div>
//!   <div class="mw-heading mw-heading2"><h2 id="French">French</h2></div>
//!   <div class="mw-heading mw-heading3"><h3>Noun</h3></div>
//!   <p><b>chat</b> <span class="gender">m</span></p>
//!   <ol><li>cat</li></ol>
//! </div>"#;
//!
//! let doc = dom::parse(html);
//! let word = extract_word(&doc, &Options::default())?;
//! let entries = filter_entries(word.entries);
//! assert_eq!(entries[0].definitions, vec!["cat"]);
//! # Ok::<(), mot_du_jour::Error>(())
//! ```

pub mod classify;
pub mod filter;
pub mod scan;
pub mod state;
pub mod tags;

pub use classify::{Classifier, NodeKind};
pub use filter::{filter_entries, partition_entries};
pub use scan::{extract_word, scan_section};
pub use state::{EntryScan, OpenEntry, ScanState};
