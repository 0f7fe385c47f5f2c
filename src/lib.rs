//! # mot-du-jour
//!
//! Rebuilds structured dictionary entries from English Wiktionary pages.
//!
//! A Wiktionary page keeps every heading, paragraph and definition list of a
//! language section as siblings at the same depth. This crate walks those
//! siblings once after the language heading and recovers the hierarchy:
//! word, part-of-speech entries, their gender and definitions.
//!
//! ## Quick Start
//!
//! ```rust
//! use mot_du_jour::{extract, Gender, PartOfSpeech};
//!
//! let html = r#"<html><body>
//! <h1>tour</h1>
//! <div class="mw-parser-output">
//!   <div class="mw-heading mw-heading2"><h2 id="French">French</h2></div>
//!   <div class="mw-heading mw-heading3"><h3 id="Noun">Noun</h3></div>
//!   <p><b>tour</b> <span class="gender"><abbr>f</abbr></span></p>
//!   <ol><li>tower</li></ol>
//! </div>
//! </body></html>"#;
//!
//! let word = extract(html)?;
//! assert_eq!(word.name, "tour");
//! assert_eq!(word.entries[0].category.part_of_speech(), Some(PartOfSpeech::Noun));
//! assert_eq!(word.entries[0].gender, Gender::Feminine);
//! # Ok::<(), mot_du_jour::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Flat-section scan**: a two-state machine over following siblings
//! - **Entry filter**: keeps parts of speech, logs other section labels
//! - **Service**: axum routes serving daily, hourly and uncached words

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Entry extraction (classification, scan state, filtering).
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page retrieval from Wiktionary or fixed HTML.
pub mod fetch;

/// Per-tier time-based caching with an injectable clock.
pub mod cache;

/// Server configuration.
pub mod config;

/// HTTP routes and handlers.
pub mod service;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{Category, Entry, Gender, PartOfSpeech, Word};

/// Extracts the filtered word from an HTML page using default options.
///
/// # Example
///
/// ```rust
/// use mot_du_jour::{extract, Error};
///
/// let result = extract("<html><body><h1>tour</h1></body></html>");
/// assert!(matches!(result, Err(Error::SectionNotFound { .. })));
/// ```
pub fn extract(html: &str) -> Result<Word> {
    extract_with_options(html, &Options::default())
}

/// Extracts the filtered word from an HTML page with custom options.
///
/// Parses the page, scans the language section and drops entries that are
/// not parts of speech.
pub fn extract_with_options(html: &str, options: &Options) -> Result<Word> {
    let doc = dom::parse(html);
    let word = extractor::extract_word(&doc, options)?;
    Ok(Word {
        name: word.name,
        entries: extractor::filter_entries(word.entries),
    })
}

/// Extracts the filtered word from HTML bytes with automatic encoding detection.
///
/// The charset is read from a byte order mark or `<meta>` declaration and
/// defaults to UTF-8.
pub fn extract_bytes(html: &[u8]) -> Result<Word> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the filtered word from HTML bytes with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Word> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
