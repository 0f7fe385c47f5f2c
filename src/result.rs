//! Result types for extraction output.
//!
//! This module defines the structured lexical record rebuilt from a dictionary
//! page: the word, its part-of-speech entries, their gender and definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A dictionary word with its lexical entries.
///
/// Built fresh for every extraction and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Headword, taken from the page's primary heading.
    pub name: String,

    /// Entries in the order they appear on the page.
    pub entries: Vec<Entry>,
}

/// One lexical-category grouping of a word.
///
/// The same spelling may appear as several entries (e.g. a noun and a verb),
/// and the same category may repeat with different genders (le tour / la tour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Category named by the sub-heading that opened this entry.
    pub category: Category,

    /// Grammatical gender, `Gender::None` unless a gender marker was seen.
    pub gender: Gender,

    /// Definitions in list order.
    pub definitions: Vec<String>,
}

impl Entry {
    /// Create an entry with no gender and no definitions.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            gender: Gender::None,
            definitions: Vec::new(),
        }
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "masc.")]
    Masculine,
    #[serde(rename = "fem.")]
    Feminine,
    /// Words used in both genders.
    #[serde(rename = "masc. ou fem.")]
    MasculineOrFeminine,
    /// Genderless words (verbs, adverbs, ...) or no marker seen.
    #[default]
    #[serde(rename = "")]
    None,
}

impl Gender {
    /// Map the text of a gender marker to a gender.
    ///
    /// `m` and `f` are the single genders, an empty marker means no gender and
    /// anything else (`m or f`, `m pl`, ...) is read as either gender.
    #[must_use]
    pub fn from_marker(marker: &str) -> Self {
        match marker.trim() {
            "m" => Self::Masculine,
            "f" => Self::Feminine,
            "" => Self::None,
            _ => Self::MasculineOrFeminine,
        }
    }

    /// Wire value used in serialized output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Masculine => "masc.",
            Self::Feminine => "fem.",
            Self::MasculineOrFeminine => "masc. ou fem.",
            Self::None => "",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of speech, the closed set of lexical categories kept in a `Word`.
///
/// Reference: <https://en.wiktionary.org/wiki/Category:French_lemmas>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adjective,
    Adverb,
    Article,
    Conjunction,
    Contraction,
    Determiner,
    Interfix,
    Interjection,
    Morpheme,
    MultiwordTerm,
    Letter,
    Noun,
    Numeral,
    Participle,
    Phrase,
    Prefix,
    Preposition,
    PrepositionalPhrase,
    Postposition,
    Proverb,
    ProperNoun,
    Suffix,
    Verb,
}

impl PartOfSpeech {
    /// Every part of speech, in label order.
    pub const ALL: [Self; 23] = [
        Self::Adjective,
        Self::Adverb,
        Self::Article,
        Self::Conjunction,
        Self::Contraction,
        Self::Determiner,
        Self::Interfix,
        Self::Interjection,
        Self::Morpheme,
        Self::MultiwordTerm,
        Self::Letter,
        Self::Noun,
        Self::Numeral,
        Self::Participle,
        Self::Phrase,
        Self::Prefix,
        Self::Preposition,
        Self::PrepositionalPhrase,
        Self::Postposition,
        Self::Proverb,
        Self::ProperNoun,
        Self::Suffix,
        Self::Verb,
    ];

    /// Sub-heading label as written on the page.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
            Self::Article => "Article",
            Self::Conjunction => "Conjunction",
            Self::Contraction => "Contraction",
            Self::Determiner => "Determiner",
            Self::Interfix => "Interfix",
            Self::Interjection => "Interjection",
            Self::Morpheme => "Morpheme",
            Self::MultiwordTerm => "Multiword term",
            Self::Letter => "Letter",
            Self::Noun => "Noun",
            Self::Numeral => "Numeral",
            Self::Participle => "Participle",
            Self::Phrase => "Phrase",
            Self::Prefix => "Prefix",
            Self::Preposition => "Preposition",
            Self::PrepositionalPhrase => "Prepositional phrase",
            Self::Postposition => "Postposition",
            Self::Proverb => "Proverb",
            Self::ProperNoun => "Proper noun",
            Self::Suffix => "Suffix",
            Self::Verb => "Verb",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = ();

    /// Exact, case-sensitive match against the sub-heading labels.
    fn from_str(label: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|pos| pos.label() == label).ok_or(())
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category label of an entry.
///
/// Sub-headings on the page name both lexical categories and other sections
/// (Etymology, Pronunciation, Derived terms). Labels outside the part-of-speech
/// set are kept as `Unrecognized` until the entry filter drops them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    PartOfSpeech(PartOfSpeech),
    Unrecognized(String),
}

impl Category {
    /// Classify a sub-heading label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label
            .parse::<PartOfSpeech>()
            .map_or_else(|()| Self::Unrecognized(label.to_string()), Self::PartOfSpeech)
    }

    /// The label text.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::PartOfSpeech(pos) => pos.label(),
            Self::Unrecognized(label) => label,
        }
    }

    /// The part of speech, if this label is one.
    #[must_use]
    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        match self {
            Self::PartOfSpeech(pos) => Some(*pos),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::PartOfSpeech(pos) => pos.label().to_string(),
            Category::Unrecognized(label) => label,
        }
    }
}

impl From<PartOfSpeech> for Category {
    fn from(pos: PartOfSpeech) -> Self {
        Self::PartOfSpeech(pos)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
