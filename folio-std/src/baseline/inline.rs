//! Inline renderers.

use folio_core::{Composer, Element, Node, RenderError, Renderer, Tag};
use serde::Deserialize;

/// Renders `text` as a bare text leaf. A missing value renders empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Renderer for Text {
    fn render(&self, node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        Ok(Element::text(node.value.clone().unwrap_or_default()))
    }
}

/// Attributes of a `link` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkView {
    /// Target.
    pub url: String,
    /// Optional tooltip.
    #[serde(default)]
    pub title: Option<String>,
}

/// Renders `link` as an anchor around its composed children.
#[derive(Debug, Clone, Copy, Default)]
pub struct Link;

impl Renderer for Link {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: LinkView = node.decode()?;
        let mut anchor = Tag::new("a").attr("href", view.url);
        if let Some(title) = view.title {
            anchor = anchor.attr("title", title);
        }
        Ok(anchor.children(cx.compose_children(node)?).into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<LinkView>().map(|_| ())
    }
}
