//! # Renderer Registry
//!
//! Maps node type tags to renderers.
//!
//! A [`Registry`] is built once per render session by merging a baseline
//! [`RendererMap`] (the defaults of a rendering library) with a
//! caller-supplied override map. The merge is a right-biased union: every
//! baseline tag survives, an override replaces the baseline renderer for
//! the same tag, and override-only tags are added. Exactly one renderer
//! resolves per tag; overrides never chain to the renderer they replace.
//!
//! After construction the registry is immutable and is shared by reference
//! through the whole recursive walk.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    compose::Composer,
    error::RegistryError,
    fallback::Unimplemented,
    options::ComposeOptions,
    renderer::{Renderer, SharedRenderer},
};

/// Result of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// A renderer is registered for the tag.
    Matched(&'a V),
    /// No renderer is registered for the tag.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the tag was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

// ============================================================================
// RendererMap - plain tag to renderer mapping
// ============================================================================

/// An owned mapping from type tag to renderer.
///
/// Used for both sides of a registry merge. Later insertions for the same
/// tag replace earlier ones; use [`RendererMapBuilder`] to reject them
/// instead.
#[derive(Clone, Default)]
pub struct RendererMap {
    map: HashMap<String, SharedRenderer>,
}

impl RendererMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a renderer for `tag`, replacing any previous one.
    pub fn with(mut self, tag: impl Into<String>, renderer: impl Renderer) -> Self {
        self.insert(tag, renderer);
        self
    }

    /// Add an already shared renderer for `tag`, replacing any previous one.
    pub fn with_shared(mut self, tag: impl Into<String>, renderer: SharedRenderer) -> Self {
        self.map.insert(tag.into(), renderer);
        self
    }

    /// Insert a renderer, returning the one it replaced.
    pub fn insert(
        &mut self,
        tag: impl Into<String>,
        renderer: impl Renderer,
    ) -> Option<SharedRenderer> {
        self.map.insert(tag.into(), Arc::new(renderer))
    }

    /// Look up the renderer for `tag`.
    pub fn get(&self, tag: &str) -> Option<&SharedRenderer> {
        self.map.get(tag)
    }

    /// Check if a renderer is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.map.contains_key(tag)
    }

    /// Get the number of tags.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.map.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Right-biased union: entries of `overrides` win on collision.
    pub fn merge(mut self, overrides: RendererMap) -> Self {
        self.map.extend(overrides.map);
        self
    }

    /// Iterate over `(tag, renderer)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedRenderer)> {
        self.map.iter().map(|(tag, r)| (tag.as_str(), r))
    }
}

impl fmt::Debug for RendererMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererMap")
            .field("tags", &self.tags())
            .finish()
    }
}

impl FromIterator<(String, SharedRenderer)> for RendererMap {
    fn from_iter<I: IntoIterator<Item = (String, SharedRenderer)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, SharedRenderer)> for RendererMap {
    fn extend<I: IntoIterator<Item = (String, SharedRenderer)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

/// Builder for `RendererMap` that rejects duplicate tags.
pub struct RendererMapBuilder {
    map: HashMap<String, SharedRenderer>,
    allow_duplicates: bool,
}

impl RendererMapBuilder {
    /// Create an empty, strict builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow duplicate tags (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Insert a renderer for `tag`.
    ///
    /// Returns an error if the tag already exists and duplicates are not
    /// allowed.
    pub fn insert(
        &mut self,
        tag: impl Into<String>,
        renderer: impl Renderer,
    ) -> Result<(), RegistryError> {
        let tag = tag.into();
        if !self.allow_duplicates && self.map.contains_key(&tag) {
            return Err(RegistryError::DuplicateTag(tag));
        }
        self.map.insert(tag, Arc::new(renderer));
        Ok(())
    }

    /// Build the map, consuming the builder.
    pub fn build(self) -> RendererMap {
        RendererMap { map: self.map }
    }
}

impl Default for RendererMapBuilder {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            allow_duplicates: false,
        }
    }
}

/// Build a [`RendererMap`] from `tag => renderer` pairs.
///
/// ```rust
/// use folio_core::{Element, from_fn, renderer_map};
///
/// let map = renderer_map! {
///     "thematicBreak" => from_fn(|_, _| Ok(Element::Empty)),
/// };
/// assert!(map.contains("thematicBreak"));
/// ```
#[macro_export]
macro_rules! renderer_map {
    () => { $crate::RendererMap::new() };
    ($($tag:expr => $renderer:expr),+ $(,)?) => {
        $crate::RendererMap::new()$(.with($tag, $renderer))+
    };
}

// ============================================================================
// Registry - immutable, thread-safe dispatch table
// ============================================================================

/// An immutable, thread-safe dispatch table.
///
/// Created with [`Registry::build`]. Tags without an entry resolve to the
/// fallback renderer, [`Unimplemented`] unless replaced with
/// [`Registry::with_fallback`].
///
/// # Example
/// ```ignore
/// let registry = Registry::build(baseline(), overrides);
///
/// // Can be shared via Arc
/// let shared = Arc::new(registry);
/// ```
#[derive(Clone)]
pub struct Registry {
    renderers: HashMap<String, SharedRenderer>,
    fallback: SharedRenderer,
}

impl Registry {
    /// Merge `baseline` with `overrides`; overrides win on tag collision.
    pub fn build(baseline: RendererMap, overrides: RendererMap) -> Self {
        Self::from_map(baseline.merge(overrides))
    }

    /// Use `map` as-is.
    pub fn from_map(map: RendererMap) -> Self {
        Self {
            renderers: map.map,
            fallback: Arc::new(Unimplemented),
        }
    }

    /// Replace the renderer used for unknown tags.
    pub fn with_fallback(mut self, fallback: impl Renderer) -> Self {
        self.fallback = Arc::new(fallback);
        self
    }

    /// Look up the renderer registered for `tag`.
    pub fn route(&self, tag: &str) -> RouteResult<'_, SharedRenderer> {
        match self.renderers.get(tag) {
            Some(r) => RouteResult::Matched(r),
            None => RouteResult::NotFound,
        }
    }

    /// The renderer registered for `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<&SharedRenderer> {
        self.route(tag).matched()
    }

    /// The renderer registered for `tag`, or the fallback.
    pub fn resolve(&self, tag: &str) -> &SharedRenderer {
        self.get(tag).unwrap_or(&self.fallback)
    }

    /// The renderer used for unknown tags.
    pub fn fallback(&self) -> &SharedRenderer {
        &self.fallback
    }

    /// Check if a renderer is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.route(tag).is_matched()
    }

    /// Get the number of registered tags.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// A composer over this registry with default options.
    pub fn composer(&self) -> Composer<'_> {
        Composer::new(self)
    }

    /// A composer over this registry with the given options.
    pub fn composer_with(&self, options: ComposeOptions) -> Composer<'_> {
        Composer::with_options(self, options)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("tags", &self.tags())
            .finish_non_exhaustive()
    }
}
