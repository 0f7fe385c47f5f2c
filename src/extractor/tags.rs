//! Tag and class constants for Wiktionary page markup.
//!
//! Current MediaWiki output wraps every section heading in a container
//! `<div class="mw-heading mw-heading{N}"><hN id="...">Label</hN>...</div>`,
//! and places that container as a sibling of the section's paragraphs and lists.

use std::sync::LazyLock;

// === Content Tags ===

/// Primary heading holding the page title (the headword)
pub const HEADWORD_TAG: &str = "h1";

/// Paragraph tag: headword line carrying the gender marker
pub const PARAGRAPH_TAG: &str = "p";

/// Ordered list tag: one definition per item
pub const DEFINITION_LIST_TAG: &str = "ol";

/// List item tag
pub const ITEM_TAG: &str = "li";

// === Heading Tables (indexed by level - 1) ===

/// Heading tags: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Heading wrapper classes: mw-heading1 .. mw-heading6
pub static HEADING_WRAPPER_CLASSES: LazyLock<[String; 6]> =
    LazyLock::new(|| std::array::from_fn(|i| format!("mw-heading{}", i + 1)));

/// Heading tag for `level`, if it is a valid HTML heading level
#[inline]
#[must_use]
pub fn heading_tag(level: u8) -> Option<&'static str> {
    HEADING_TAGS.get(usize::from(level).checked_sub(1)?).copied()
}

/// Wrapper class for headings of `level`
#[inline]
#[must_use]
pub fn heading_wrapper_class(level: u8) -> Option<&'static str> {
    HEADING_WRAPPER_CLASSES
        .get(usize::from(level).checked_sub(1)?)
        .map(String::as_str)
}
