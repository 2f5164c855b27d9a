//! HTML serialization of element trees.

use std::fmt::Write;

use folio_core::{Element, Tag};

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

/// Serialize `element` as HTML.
///
/// Text and attribute values are escaped. Classes come first as a single
/// `class` attribute, followed by the remaining attributes in insertion
/// order. Fragments and [`Element::Empty`] produce no markup of their own.
///
/// ```rust
/// use folio_core::{Element, Tag};
/// use folio_std::output::html::to_html;
///
/// let el: Element = Tag::new("code").class("directive").child("a<b").into();
/// assert_eq!(to_html(&el), r#"<code class="directive">a&lt;b</code>"#);
/// ```
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    match element {
        Element::Tag(tag) => write_tag(out, tag),
        Element::Text(text) => escape_into(out, text),
        Element::Fragment(children) => {
            for child in children {
                write_element(out, child);
            }
        }
        Element::Empty => {}
    }
}

fn write_tag(out: &mut String, tag: &Tag) {
    out.push('<');
    out.push_str(&tag.name);
    if !tag.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(out, &tag.classes.join(" "));
        out.push('"');
    }
    for (key, value) in &tag.attrs {
        let _ = write!(out, " {key}=\"");
        escape_into(out, value);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag.name.as_str()) {
        return;
    }
    for child in &tag.children {
        write_element(out, child);
    }
    let _ = write!(out, "</{}>", tag.name);
}

/// Append `text` to `out` with HTML special characters escaped.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
