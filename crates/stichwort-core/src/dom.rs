//! Tree navigation helpers shared by the scraping adapters.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node, Selector};

/// Compile a selector literal. Call sites only pass statically known
/// strings; invalid syntax panics.
pub fn selector(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(parsed) => parsed,
        Err(err) => panic!("bad selector {css:?}: {err}"),
    }
}

/// Concatenated text of an element's subtree
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Element children, text nodes skipped
pub fn child_elements<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// Nearest following sibling that is an element
pub fn next_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Element siblings after `el`, in document order
pub fn next_element_siblings<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.next_siblings().filter_map(ElementRef::wrap).collect()
}

/// Element siblings before `el`, nearest first
pub fn prev_element_siblings<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.prev_siblings().filter_map(ElementRef::wrap).collect()
}

/// Whatever text a node carries: its own content for a text node, the
/// collected subtree text for an element
pub fn node_text(node: NodeRef<'_, Node>) -> String {
    if let Some(element) = ElementRef::wrap(node) {
        return text_of(element);
    }
    match node.value() {
        Node::Text(text) => text.to_string(),
        _ => String::new(),
    }
}

/// Nearest preceding element named `name`: earlier siblings first,
/// then the parent's earlier siblings, up the tree
pub fn preceding_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    for candidate in prev_element_siblings(el) {
        if candidate.value().name() == name {
            return Some(candidate);
        }
    }
    el.parent()
        .and_then(ElementRef::wrap)
        .and_then(|parent| preceding_named(parent, name))
}

/// Nearest following element named `name`: later siblings first, then
/// the parent's later siblings, up the tree
pub fn following_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    for candidate in next_element_siblings(el) {
        if candidate.value().name() == name {
            return Some(candidate);
        }
    }
    el.parent()
        .and_then(ElementRef::wrap)
        .and_then(|parent| following_named(parent, name))
}

/// Subtree text with `<br>` rendered as a single space
pub fn text_with_breaks(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == "br" => out.push(' '),
            _ => {}
        }
    }
    out
}
