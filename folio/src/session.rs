//! Render sessions.
//!
//! A [`Session`] owns one merged registry and the options to compose with.
//! It is cheap to clone and safe to share between threads; every render
//! call works on its own stack and never mutates the registry.

use std::sync::Arc;

use folio_core::{
    ComposeOptions, Composer, Element, Node, Registry, RendererMap, RendererMapBuilder,
    SharedRenderer,
};
use folio_std::{
    default_renderers,
    output::{TextWriter, to_html},
};

use crate::FolioError;

/// One render session: the standard renderers merged with caller overrides.
///
/// # Example
///
/// ```rust
/// use folio::{Element, Node, RendererMap, Session, from_fn};
///
/// let overrides = RendererMap::new().with("text", from_fn(|node, _| {
///     Ok(Element::text(node.value.as_deref().unwrap_or_default().to_uppercase()))
/// }));
/// let session = Session::new(overrides);
///
/// let out = session.render_json(r#"{"type": "text", "value": "hi"}"#).unwrap();
/// assert_eq!(out, Element::text("HI"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    registry: Arc<Registry>,
    options: ComposeOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RendererMap::new())
    }
}

impl Session {
    /// Build a session from the standard renderers and `overrides`.
    ///
    /// Overrides replace the standard renderer for the same tag.
    pub fn new(overrides: RendererMap) -> Self {
        Self::from_registry(Registry::build(default_renderers(), overrides))
    }

    /// Like [`Session::new`], but fail if `overrides` names a tag twice.
    pub fn try_new<I, T>(overrides: I) -> Result<Self, FolioError>
    where
        I: IntoIterator<Item = (T, SharedRenderer)>,
        T: Into<String>,
    {
        let mut builder = RendererMapBuilder::new();
        for (tag, renderer) in overrides {
            builder.insert(tag, renderer)?;
        }
        Ok(Self::new(builder.build()))
    }

    /// Use a prebuilt registry as-is.
    pub fn from_registry(registry: Registry) -> Self {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(tags = registry.len(), "render session created");
        }
        Self {
            registry: Arc::new(registry),
            options: ComposeOptions::default(),
        }
    }

    /// Set the composition options.
    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    /// The merged registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The composition options.
    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// A root composer over this session's registry.
    pub fn composer(&self) -> Composer<'_> {
        self.registry.composer_with(self.options)
    }

    /// Compose one node tree.
    pub fn render(&self, node: &Node) -> Result<Element, FolioError> {
        Ok(self.composer().compose(node)?)
    }

    /// Compose a sequence of trees, preserving order.
    pub fn render_many(&self, nodes: &[Node]) -> Result<Vec<Element>, FolioError> {
        Ok(self.composer().compose_many(nodes)?)
    }

    /// Parse a node tree from JSON and compose it.
    pub fn render_json(&self, json: &str) -> Result<Element, FolioError> {
        let node = Node::from_json(json)?;
        self.render(&node)
    }

    /// Compose a node tree and serialize it as HTML.
    pub fn render_html(&self, node: &Node) -> Result<String, FolioError> {
        self.render(node).map(|el| to_html(&el))
    }

    /// Compose a node tree and write it as plain text wrapped at `width`.
    pub fn render_text(&self, node: &Node, width: usize) -> Result<String, FolioError> {
        self.render(node).map(|el| TextWriter::new(width).write(&el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Hardening, RenderError, from_fn};

    #[test]
    fn test_default_session_knows_standard_tags() {
        let session = Session::default();
        assert!(session.registry().contains("paragraph"));
        assert!(session.registry().contains("ParameterNode"));
    }

    #[test]
    fn test_try_new_rejects_duplicate_overrides() {
        let shared: SharedRenderer = Arc::new(from_fn(|_, _| Ok(Element::Empty)));
        let result = Session::try_new([("text", shared.clone()), ("text", shared)]);
        assert!(matches!(result, Err(FolioError::Registry(_))));
    }

    #[test]
    fn test_options_are_applied() {
        let session = Session::default().with_options(ComposeOptions::default().fail_on_unknown());
        let err = session.render(&Node::new("mystery")).unwrap_err();
        assert!(matches!(err, FolioError::Render(RenderError::UnknownNodeType(_))));

        let session = Session::default()
            .with_options(ComposeOptions::default().with_hardening(Hardening::VALIDATE));
        assert!(session.render(&Node::new("signature")).unwrap().is_diagnostic());
    }

    #[test]
    fn test_render_json_reports_bad_input() {
        let err = Session::default().render_json("not json").unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn test_render_text() {
        let node = Node::new("paragraph").with_children(vec![Node::text("one two three")]);
        let out = Session::default().render_text(&node, 8).unwrap();
        assert_eq!(out, "one two\nthree");
    }
}
