//! DOM tree-walking helpers shared by the locator, cleaner and highlighter.
//!
//! All helpers operate on `kuchiki::NodeRef` trees and tolerate arbitrary
//! malformed markup: walks are iterative (no recursion on node depth) and
//! unsupported node kinds are skipped rather than reported.

use kuchiki::iter::NodeEdge;
use kuchiki::traits::*;
use kuchiki::{Attribute, ElementData, ExpandedName, NodeRef};

/// Elements whose text never counts as visible.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that end a line when flattening a subtree to text.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "aside", "header", "footer", "nav", "blockquote",
    "pre", "figure", "figcaption", "ul", "ol", "li", "dl", "dt", "dd", "table", "tr", "br", "hr",
    "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Parse a full HTML document. The parser follows the HTML5 spec; implicit
/// `<html>`, `<head>` and `<body>` are synthesised when missing.
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Deep-copy a subtree so later mutation never touches the live document.
///
/// Only element, text and comment nodes are copied; anything else (doctype,
/// processing instructions) is dropped. Returns `None` when the root itself
/// is not copyable.
pub fn deep_clone(root: &NodeRef) -> Option<NodeRef> {
    let copy = shallow_copy(root)?;
    let mut stack = vec![(root.clone(), copy.clone())];
    while let Some((original, parent_copy)) = stack.pop() {
        for child in original.children() {
            if let Some(child_copy) = shallow_copy(&child) {
                parent_copy.append(child_copy.clone());
                stack.push((child, child_copy));
            }
        }
    }
    Some(copy)
}

fn shallow_copy(node: &NodeRef) -> Option<NodeRef> {
    if let Some(element) = node.as_element() {
        let attributes = element.attributes.borrow().map.clone();
        return Some(NodeRef::new_element(element.name.clone(), attributes));
    }
    if let Some(text) = node.as_text() {
        return Some(NodeRef::new_text(text.borrow().clone()));
    }
    node.as_comment()
        .map(|comment| NodeRef::new_comment(comment.borrow().clone()))
}

/// Build a detached HTML element with the given tag and attributes.
///
/// Goes through the HTML parser so the element carries a proper qualified
/// name without hand-building namespace atoms.
pub fn new_element(tag: &str, attributes: &[(&str, &str)]) -> NodeRef {
    let shell = parse_document(&format!("<{tag}></{tag}>"));
    let element = match shell.select_first(tag) {
        Ok(found) => found.as_node().clone(),
        Err(()) => NodeRef::new_text(String::new()),
    };
    element.detach();
    if let Some(data) = element.as_element() {
        let mut attrs = data.attributes.borrow_mut();
        for (name, value) in attributes {
            attrs.map.insert(
                ExpandedName::new("", *name),
                Attribute {
                    prefix: None,
                    value: (*value).to_string(),
                },
            );
        }
    }
    element
}

/// Flatten a subtree to the text a reader would see.
///
/// Skips invisible containers (`script`, `style`, `aria-hidden`, the `hidden`
/// attribute) and inserts a newline after each block-level element so words
/// from adjacent blocks do not run together.
pub fn visible_text(root: &NodeRef) -> String {
    let mut out = String::new();
    let mut skipping = 0usize;
    for edge in root.traverse_inclusive() {
        match edge {
            NodeEdge::Start(node) => {
                if skipping > 0 {
                    if node.as_element().is_some() {
                        skipping += 1;
                    }
                    continue;
                }
                if let Some(element) = node.as_element() {
                    if is_invisible(element) {
                        skipping = 1;
                    }
                } else if let Some(text) = node.as_text() {
                    out.push_str(&text.borrow());
                }
            }
            NodeEdge::End(node) => {
                if let Some(element) = node.as_element() {
                    if skipping > 0 {
                        skipping -= 1;
                    } else if is_block(element) {
                        out.push('\n');
                    }
                }
            }
        }
    }
    out
}

fn is_invisible(element: &ElementData) -> bool {
    let tag: &str = &element.name.local;
    if INVISIBLE_TAGS.contains(&tag) {
        return true;
    }
    let attributes = element.attributes.borrow();
    attributes.get("aria-hidden") == Some("true") || attributes.contains("hidden")
}

fn is_block(element: &ElementData) -> bool {
    BLOCK_TAGS.contains(&&*element.name.local)
}

/// Count whitespace-delimited tokens. Empty input counts zero.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Serialize the children of a node (the `innerHTML` view).
pub fn inner_html(node: &NodeRef) -> String {
    let mut bytes = Vec::new();
    for child in node.children() {
        let _ = child.serialize(&mut bytes);
    }
    String::from_utf8(bytes).unwrap_or_default()
}
