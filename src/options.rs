//! Configuration options for entry extraction.
//!
//! The `Options` struct tells the extraction engine which language section to
//! scan and which markup identifies headings and gender markers.

use crate::{Error, Result};

/// Configuration options for entry extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for English Wiktionary pages of French words.
///
/// # Example
///
/// ```rust
/// use mot_du_jour::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Scan the Old French section instead
/// let options = Options {
///     language: "Old French".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Language section to extract, as displayed in its heading.
    ///
    /// The heading is located by its `id`, which is this name with spaces
    /// replaced by underscores.
    ///
    /// Default: `"French"`
    pub language: String,

    /// Heading level of language sections (`2` means `<h2>` wrapped in
    /// `<div class="mw-heading mw-heading2">`).
    ///
    /// A wrapper at this level with a different language name ends the scan.
    ///
    /// Default: `2`
    pub language_heading_level: u8,

    /// Heading levels that open a new entry.
    ///
    /// Default: `[3]`
    pub category_heading_levels: Vec<u8>,

    /// CSS selector for the gender marker inside a headword paragraph.
    ///
    /// Default: `"span.gender"`
    pub gender_selector: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            language: "French".to_string(),
            language_heading_level: 2,
            category_heading_levels: vec![3],
            gender_selector: "span.gender".to_string(),
        }
    }
}

impl Options {
    /// Value of the `id` attribute carried by the language heading.
    #[must_use]
    pub fn language_id(&self) -> String {
        self.language.trim().replace(' ', "_")
    }

    /// Check the options describe a scan that can work.
    ///
    /// Heading levels must lie within `h1..=h6` and category headings must sit
    /// below the language heading.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(Error::Config("language must not be empty".to_string()));
        }
        if !(1..=6).contains(&self.language_heading_level) {
            return Err(Error::Config(format!(
                "language heading level {} is outside h1..h6",
                self.language_heading_level
            )));
        }
        if let Some(level) = self
            .category_heading_levels
            .iter()
            .find(|&&level| level <= self.language_heading_level || level > 6)
        {
            return Err(Error::Config(format!(
                "category heading level {level} must be below h{} and within h6",
                self.language_heading_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_french() {
        let options = Options::default();
        assert_eq!(options.language, "French");
        assert_eq!(options.language_heading_level, 2);
        assert_eq!(options.category_heading_levels, vec![3]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn language_id_uses_underscores() {
        let options = Options {
            language: "Old French".to_string(),
            ..Options::default()
        };
        assert_eq!(options.language_id(), "Old_French");
    }

    #[test]
    fn category_level_must_be_below_language_level() {
        let options = Options {
            category_heading_levels: vec![2],
            ..Options::default()
        };
        assert!(matches!(options.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_empty_language() {
        let options = Options {
            language: "  ".to_string(),
            ..Options::default()
        };
        assert!(options.validate().is_err());
    }
}
