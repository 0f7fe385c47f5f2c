//! Sibling node classification.
//!
//! Every node following the language heading is sorted into one of a few
//! kinds before the scan acts on it. Heading wrappers are recognised by their
//! `mw-heading{N}` class, content by its tag.

use crate::dom::{self, Selection};
use crate::result::Gender;
use crate::{Error, Options, Result};

use super::tags::{
    heading_tag, heading_wrapper_class, DEFINITION_LIST_TAG, ITEM_TAG, PARAGRAPH_TAG,
};

/// What a sibling node means to the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Category sub-heading with its trimmed label.
    CategoryHeading(String),
    /// Heading at the language level with its trimmed text.
    SectionHeading(String),
    /// Heading wrapper with no heading element inside.
    Malformed,
    /// Paragraph, with the gender from its marker if it has one.
    Paragraph(Option<Gender>),
    /// Ordered list, reduced to one definition per item.
    DefinitionList(Vec<String>),
    /// Anything else (tables, quotations, unordered lists...).
    Other,
}

/// A heading level resolved to its tag and wrapper class.
#[derive(Debug, Clone, Copy)]
struct HeadingMarkup {
    tag: &'static str,
    class: &'static str,
}

impl HeadingMarkup {
    fn for_level(level: u8) -> Result<Self> {
        match (heading_tag(level), heading_wrapper_class(level)) {
            (Some(tag), Some(class)) => Ok(Self { tag, class }),
            _ => Err(Error::Config(format!("invalid heading level {level}"))),
        }
    }
}

/// Node classifier configured from `Options`.
#[derive(Debug, Clone)]
pub struct Classifier {
    language: String,
    language_id: String,
    section: HeadingMarkup,
    categories: Vec<HeadingMarkup>,
    gender_selector: String,
}

impl Classifier {
    /// Build a classifier, rejecting options that cannot describe a page.
    pub fn new(options: &Options) -> Result<Self> {
        options.validate()?;

        let categories = options
            .category_heading_levels
            .iter()
            .map(|&level| HeadingMarkup::for_level(level))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            language: options.language.trim().to_string(),
            language_id: options.language_id(),
            section: HeadingMarkup::for_level(options.language_heading_level)?,
            categories,
            gender_selector: options.gender_selector.clone(),
        })
    }

    /// Displayed name of the target language.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether a section heading names the target language.
    #[must_use]
    pub fn is_target_language(&self, heading_text: &str) -> bool {
        heading_text == self.language
    }

    /// The heading element that starts the target language section.
    #[must_use]
    pub fn find_language_heading<'a>(&self, doc: &'a dom::Document) -> Option<Selection<'a>> {
        dom::find_by_id(doc, self.section.tag, &self.language_id)
    }

    /// Classify one sibling node.
    ///
    /// Heading wrappers are checked first, category level before language
    /// level, then content tags.
    #[must_use]
    pub fn classify(&self, node: &Selection) -> NodeKind {
        for markup in &self.categories {
            if dom::has_class(node, markup.class) {
                return match dom::query_first(node, markup.tag) {
                    Some(heading) => {
                        NodeKind::CategoryHeading(dom::text_content(&heading).trim().to_string())
                    }
                    None => NodeKind::Malformed,
                };
            }
        }

        if dom::has_class(node, self.section.class) {
            return match dom::query_first(node, self.section.tag) {
                Some(heading) => {
                    NodeKind::SectionHeading(dom::text_content(&heading).trim().to_string())
                }
                None => NodeKind::Malformed,
            };
        }

        if dom::is_tag(node, PARAGRAPH_TAG) {
            return NodeKind::Paragraph(self.gender_marker(node));
        }

        if dom::is_tag(node, DEFINITION_LIST_TAG) {
            return NodeKind::DefinitionList(definitions(node));
        }

        NodeKind::Other
    }

    fn gender_marker(&self, paragraph: &Selection) -> Option<Gender> {
        dom::query_first(paragraph, &self.gender_selector)
            .map(|marker| Gender::from_marker(&dom::text_content(&marker)))
    }
}

/// One definition per list item: the item text up to its first line break.
///
/// Items of nested ordered lists (sub-senses) are definitions in their own
/// right and follow their parent item. Items of nested bulleted lists hold
/// quotations and are skipped. Usage examples sit on the following lines and
/// are cut off. A quotation written inline on the first line stays in the
/// definition.
fn definitions(list: &Selection) -> Vec<String> {
    dom::descendants_by_tag(list, ITEM_TAG)
        .into_iter()
        .filter(|item| dom::is_tag(&dom::parent(item), DEFINITION_LIST_TAG))
        .map(|item| first_line(&dom::text_content(&item)).to_string())
        .collect()
}

fn first_line(text: &str) -> &str {
    text.split_once('\n').map_or(text, |(first, _)| first)
}
