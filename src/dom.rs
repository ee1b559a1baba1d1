//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. Parsing is lenient (html5ever
//! repairs unclosed tags and broken nesting), so nothing here can fail.

// Re-export core types for external use
pub use dom_query::{Document, NodeData, NodeRef};

// Text node contents are handed out as StrTendril, which clones in O(1)
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// The input is treated as a full document: `html`, `head` and `body` are
/// synthesized when missing.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Collect the contents of every text node in document order.
///
/// Comments, doctype and processing instructions are skipped. No element is
/// special-cased: text inside `<script>` and `<style>` is collected like any
/// other text, and `<template>` contents are walked in place of the
/// template's children.
///
/// The walk uses an explicit stack so deeply nested markup cannot overflow
/// the call stack.
#[must_use]
pub fn text_nodes(doc: &Document) -> Vec<StrTendril> {
    let mut texts = Vec::new();
    let mut stack = Vec::new();
    push_children(&doc.root(), &mut stack);

    while let Some(node) = stack.pop() {
        if node.is_text() {
            texts.push(node.text());
        } else if node.is_element() {
            match template_contents(&node) {
                Some(fragment) => push_children(&fragment, &mut stack),
                None => push_children(&node, &mut stack),
            }
        }
    }

    texts
}

/// The fragment holding a `<template>` element's contents.
///
/// The parser stores template contents in a separate fragment rather than as
/// children of the element.
fn template_contents<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.query(|n| match &n.data {
        NodeData::Element(el) => el.template_contents,
        _ => None,
    })
    .flatten()
    .map(|id| NodeRef::new(id, node.tree))
}

/// Push a node's children so that the first child is popped first.
fn push_children<'a>(node: &NodeRef<'a>, stack: &mut Vec<NodeRef<'a>>) {
    let start = stack.len();
    let mut child = node.first_child();
    while let Some(c) = child {
        child = c.next_sibling();
        stack.push(c);
    }
    stack[start..].reverse();
}
