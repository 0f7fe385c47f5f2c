//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the handful of tree
//! operations the extraction engine relies on: locate by identifier, element
//! children by tag, following siblings, own text and class membership.

pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check if the first element of the selection has `tag`
#[must_use]
pub fn is_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Check class membership
#[inline]
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.has_class(class)
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Querying ===

/// First match of a CSS selector below `sel`, if any
#[must_use]
pub fn query_first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// First element in the document with `tag`
#[must_use]
pub fn first_by_tag<'a>(doc: &'a Document, tag: &str) -> Option<Selection<'a>> {
    let found = doc.select(tag).first();
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// Element with `tag` whose `id` attribute equals `id`
#[must_use]
pub fn find_by_id<'a>(doc: &'a Document, tag: &str, id: &str) -> Option<Selection<'a>> {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    let found = doc.select(&format!(r#"{tag}[id="{escaped}"]"#)).first();
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Descendant elements with `tag`, in document order
#[must_use]
pub fn descendants_by_tag<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    sel.select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

fn next_element(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Iterate over the element siblings that follow `sel`, in document order.
///
/// Earlier siblings and descendants are never visited.
#[must_use]
pub fn following_siblings<'a>(sel: &Selection<'a>) -> FollowingSiblings<'a> {
    FollowingSiblings {
        next: sel.nodes().first().and_then(|node| next_element(*node)),
    }
}

/// Iterator returned by [`following_siblings`].
pub struct FollowingSiblings<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for FollowingSiblings<'a> {
    type Item = Selection<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = next_element(current);
        Some(Selection::from(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_heading_by_id_and_tag() {
        let doc = parse(r#"<div><h2 id="French">French</h2><h3 id="French">Other</h3></div>"#);
        let heading = find_by_id(&doc, "h2", "French").unwrap();
        assert_eq!(&*text_content(&heading), "French");
        assert!(find_by_id(&doc, "h2", "German").is_none());
    }

    #[test]
    fn following_siblings_skip_text_and_earlier_nodes() {
        let doc = parse("<div><p>a</p><b>start</b> text <i>x</i><!-- c --><u>y</u></div>");
        let start = doc.select("b");
        let tags: Vec<String> = following_siblings(&start)
            .filter_map(|s| tag_name(&s))
            .collect();
        assert_eq!(tags, vec!["i", "u"]);
    }

    #[test]
    fn descendants_by_tag_walks_nested_lists_in_order() {
        let doc = parse("<ol><li>one<ol><li>nested</li></ol></li><li>two</li></ol>");
        let list = doc.select("ol").first();
        let items = descendants_by_tag(&list, "li");
        assert_eq!(items.len(), 3);
        assert_eq!(&*text_content(&items[1]), "nested");
        assert_eq!(&*text_content(&items[2]), "two");
    }

    #[test]
    fn query_first_returns_none_when_missing() {
        let doc = parse("<p>no marker</p>");
        let p = doc.select("p");
        assert!(query_first(&p, "span.gender").is_none());
    }
}
