//! # Baseline Renderers
//!
//! The default renderer set for plain markdown nodes. Callers merge their
//! own overrides on top of it with [`Registry::build`](folio_core::Registry::build).
//!
//! Container renderers compose their children through the composer; leaf
//! renderers read `value` and emit text.

mod block;
mod inline;

pub use block::{
    Admonition, AdmonitionView, CodeBlock, CodeView, Heading, HeadingView, List, ListView,
};
pub use inline::{Link, LinkView, Text};

use folio_core::{Composer, Element, Node, RenderError, Renderer, RendererMap, Tag};
use serde::Deserialize;

/// Renders a node as a tag wrapping its composed children.
#[derive(Debug, Clone, Copy)]
pub struct Container {
    name: &'static str,
    class: Option<&'static str>,
}

impl Container {
    /// Wrap children in a `name` element.
    pub const fn new(name: &'static str) -> Self {
        Self { name, class: None }
    }

    /// Wrap children in a `name` element carrying `class`.
    pub const fn with_class(name: &'static str, class: &'static str) -> Self {
        Self {
            name,
            class: Some(class),
        }
    }
}

impl Renderer for Container {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let mut tag = Tag::new(self.name);
        if let Some(class) = self.class {
            tag = tag.class(class);
        }
        Ok(tag.children(cx.compose_children(node)?).into())
    }
}

/// Renders a node's children without a wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transparent;

impl Renderer for Transparent {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        cx.compose_fragment(node.children())
    }
}

/// Renders a node's required `value` inside a tag.
#[derive(Debug, Clone, Copy)]
pub struct Literal {
    name: &'static str,
    class: Option<&'static str>,
}

impl Literal {
    /// Put the value in a `name` element.
    pub const fn new(name: &'static str) -> Self {
        Self { name, class: None }
    }

    /// Put the value in a `name` element carrying `class`.
    pub const fn with_class(name: &'static str, class: &'static str) -> Self {
        Self {
            name,
            class: Some(class),
        }
    }
}

#[derive(Deserialize)]
struct ValueView {
    value: String,
}

impl Renderer for Literal {
    fn render(&self, node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: ValueView = node.decode()?;
        let mut tag = Tag::new(self.name);
        if let Some(class) = self.class {
            tag = tag.class(class);
        }
        Ok(tag.child(view.value).into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<ValueView>().map(|_| ())
    }
}

/// Renders a childless element such as `hr`.
#[derive(Debug, Clone, Copy)]
pub struct Void(pub &'static str);

impl Renderer for Void {
    fn render(&self, _node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        Ok(Tag::new(self.0).into())
    }
}

/// The baseline renderer set.
pub fn renderers() -> RendererMap {
    RendererMap::new()
        // Blocks
        .with("root", Transparent)
        .with("block", Container::with_class("div", "block"))
        .with("paragraph", Container::new("p"))
        .with("heading", Heading)
        .with("code", CodeBlock)
        .with("list", List)
        .with("listItem", Container::new("li"))
        .with("blockquote", Container::new("blockquote"))
        .with("thematicBreak", Void("hr"))
        .with("admonition", Admonition)
        .with("admonitionTitle", Container::with_class("p", "admonition-title"))
        .with("math", Literal::with_class("div", "math"))
        // Inline
        .with("text", Text)
        .with("emphasis", Container::new("em"))
        .with("strong", Container::new("strong"))
        .with("inlineCode", Literal::new("code"))
        .with("link", Link)
        .with("break", Void("br"))
        .with("inlineMath", Literal::with_class("span", "math"))
}
