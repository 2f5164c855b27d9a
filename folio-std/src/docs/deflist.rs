//! Definition list renderer.

use folio_core::{Composer, DefListView, Element, Node, RenderError, Renderer, Tag};

/// Renders a `DefList` as a `dl` of term/description pairs.
///
/// Items are not tagged nodes themselves; the term and each description
/// node are composed individually.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefList;

impl Renderer for DefList {
    fn render(&self, node: &Node, cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view = DefListView::from_node(node)?;

        let mut list = Tag::new("dl");
        for item in &view.children {
            list = list
                .child(Tag::new("dt").child(cx.compose(&item.dt)?))
                .child(Tag::new("dd").children(cx.compose_many(&item.dd)?));
        }
        Ok(list.into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        DefListView::from_node(node).map(|_| ())
    }
}
