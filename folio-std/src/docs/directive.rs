//! Directive renderer.

use folio_core::{Composer, DirectiveView, Element, Node, RenderError, Renderer, Tag};

/// Format a directive the way it was written in the source.
///
/// ```rust
/// use folio_core::DirectiveView;
/// use folio_std::docs::format_directive;
///
/// let view = DirectiveView {
///     domain: Some("py".into()),
///     role: Some("func".into()),
///     value: "abc".into(),
/// };
/// assert_eq!(format_directive(&view), ":py:func:`abc`");
/// ```
pub fn format_directive(view: &DirectiveView) -> String {
    let mut out = String::new();
    if let Some(domain) = &view.domain {
        out.push(':');
        out.push_str(domain);
    }
    if let Some(role) = &view.role {
        out.push(':');
        out.push_str(role);
        out.push(':');
    }
    out.push('`');
    out.push_str(&view.value);
    out.push('`');
    out
}

/// Renders an inline directive as a code-styled element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directive;

impl Renderer for Directive {
    fn render(&self, node: &Node, _cx: &Composer<'_>) -> Result<Element, RenderError> {
        let view: DirectiveView = node.decode()?;
        Ok(Tag::new("code")
            .class("directive")
            .child(format_directive(&view))
            .into())
    }

    fn validate(&self, node: &Node) -> Result<(), RenderError> {
        node.decode::<DirectiveView>().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(domain: Option<&str>, role: Option<&str>) -> DirectiveView {
        DirectiveView {
            domain: domain.map(str::to_string),
            role: role.map(str::to_string),
            value: "abc".into(),
        }
    }

    #[test]
    fn test_format_directive() {
        assert_eq!(format_directive(&view(None, None)), "`abc`");
        assert_eq!(format_directive(&view(None, Some("func"))), ":func:`abc`");
        assert_eq!(format_directive(&view(Some("py"), None)), ":py`abc`");
        assert_eq!(format_directive(&view(Some("py"), Some("func"))), ":py:func:`abc`");
    }
}
