//! Shared fixtures for integration tests.

#![allow(dead_code)]

use folio::{Element, Node, Session, Tag};
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    /// A session over the standard renderers, shared by every test.
    pub static ref SESSION: Session = Session::default();
}

/// Build a node tree from a `json!` value.
pub fn node(value: Value) -> Node {
    Node::from_value(value).expect("fixture is a valid node tree")
}

/// A tag by class, anywhere in the tree.
pub fn class<'a>(el: &'a Element, class: &str) -> &'a Tag {
    el.find_class(class)
        .unwrap_or_else(|| panic!("no element with class `{class}` in {el:?}"))
}

/// Text of the subtree rooted at the tag with `class`.
pub fn class_text(el: &Element, class_name: &str) -> String {
    Element::Tag(class(el, class_name).clone()).text_content()
}

/// A `paragraph` of text nodes.
pub fn paragraph(texts: &[&str]) -> Node {
    Node::new("paragraph").with_children(texts.iter().map(|t| Node::text(*t)))
}
