//! Block-level renderers that need more than a tag name.

use folio_core::{Composer, Element, Node, RenderError, Renderer, Tag};
use serde::Deserialize;

/// Attributes of a `heading` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeadingView {
    /// Level as written; rendering clamps it to 1 to 6.
    #[serde(default = "HeadingView::default_depth")]
    pub depth: u64,
}

impl HeadingView {
    fn default_depth() -> u64 {
        1
    }
}

/// Renders `heading` as `h1` to `h6`; out-of-range levels are clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heading;

impl Renderer for Heading {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: HeadingView = node.decode()?;
        let level = view.depth.clamp(1, 6);
        Ok(Tag::new(format!("h{level}"))
            .children(cx.compose_children(node)?)
            .into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<HeadingView>().map(|_| ())
    }
}

/// Attributes of a fenced `code` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CodeView {
    /// Info-string language.
    #[serde(default)]
    pub lang: Option<String>,
    /// The code itself.
    pub value: String,
}

/// Renders `code` as `pre > code`, tagging the language when known.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlock;

impl Renderer for CodeBlock {
    fn render(&self, node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: CodeView = node.decode()?;
        let mut code = Tag::new("code");
        if let Some(lang) = view.lang.filter(|l| !l.is_empty()) {
            code = code.class(format!("language-{lang}"));
        }
        Ok(Tag::new("pre").child(code.child(view.value)).into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<CodeView>().map(|_| ())
    }
}

/// Attributes of a `list` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListView {
    /// Numbered rather than bulleted.
    #[serde(default)]
    pub ordered: Option<bool>,
    /// First number of an ordered list.
    #[serde(default)]
    pub start: Option<u64>,
}

/// Renders `list` as `ol` or `ul`.
#[derive(Debug, Clone, Copy, Default)]
pub struct List;

impl Renderer for List {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: ListView = node.decode()?;
        let mut tag = if view.ordered.unwrap_or(false) {
            Tag::new("ol")
        } else {
            Tag::new("ul")
        };
        if let Some(start) = view.start.filter(|&s| s != 1) {
            tag = tag.attr("start", start.to_string());
        }
        Ok(tag.children(cx.compose_children(node)?).into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<ListView>().map(|_| ())
    }
}

/// Attributes of an `admonition` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdmonitionView {
    /// Admonition kind such as `note` or `warning`.
    #[serde(default)]
    pub kind: Option<String>,
}

/// Renders `admonition` as an `aside` classed by kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Admonition;

impl Renderer for Admonition {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: AdmonitionView = node.decode()?;
        let mut tag = Tag::new("aside").class("admonition");
        if let Some(kind) = view.kind {
            tag = tag.class(kind);
        }
        Ok(tag.children(cx.compose_children(node)?).into())
    }
}
