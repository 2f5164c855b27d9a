//! Composition options.
//!
//! The registry is the main configuration surface of a render session;
//! these options only decide how the engine reacts when a node cannot be
//! rendered.

use bitflags::bitflags;

bitflags! {
    /// Opt-in recovery behavior of the composer.
    ///
    /// With no flags set the composer keeps the reference behavior: unknown
    /// tags degrade to a diagnostic element, every other failure aborts the
    /// whole composition.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hardening: u8 {
        /// Run [`Renderer::validate`](crate::Renderer::validate) before
        /// rendering; a malformed node becomes a diagnostic element.
        const VALIDATE = 1 << 0;
        /// Convert any failure of a subtree into a diagnostic element so
        /// siblings still render.
        const ISOLATE = 1 << 1;
    }
}

impl Default for Hardening {
    fn default() -> Self {
        Hardening::empty()
    }
}

/// What to do with a node whose tag has no registered renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownPolicy {
    /// Render it with the registry's fallback renderer.
    #[default]
    Fallback,
    /// Fail the composition with
    /// [`RenderError::UnknownNodeType`](crate::RenderError::UnknownNodeType).
    Fail,
}

/// Default limit on composition depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for a [`Composer`](crate::Composer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Handling of unknown tags.
    pub unknown: UnknownPolicy,
    /// Recovery flags.
    pub hardening: Hardening,
    /// Maximum nesting depth before composition fails.
    pub max_depth: usize,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            unknown: UnknownPolicy::Fallback,
            hardening: Hardening::empty(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ComposeOptions {
    /// Options with every hardening flag enabled.
    pub fn hardened() -> Self {
        Self::default().with_hardening(Hardening::all())
    }

    /// Set the hardening flags.
    pub fn with_hardening(mut self, hardening: Hardening) -> Self {
        self.hardening = hardening;
        self
    }

    /// Fail on unknown tags instead of using the fallback renderer.
    pub fn fail_on_unknown(mut self) -> Self {
        self.unknown = UnknownPolicy::Fail;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether renderers validate nodes before rendering.
    pub fn validates(&self) -> bool {
        self.hardening.contains(Hardening::VALIDATE)
    }

    /// Whether subtree failures are isolated.
    pub fn isolates(&self) -> bool {
        self.hardening.contains(Hardening::ISOLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_reference_behavior() {
        let options = ComposeOptions::default();
        assert_eq!(options.unknown, UnknownPolicy::Fallback);
        assert!(!options.validates());
        assert!(!options.isolates());
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_hardened() {
        let options = ComposeOptions::hardened();
        assert!(options.validates());
        assert!(options.isolates());

        let options = ComposeOptions::default()
            .with_hardening(Hardening::VALIDATE)
            .fail_on_unknown()
            .with_max_depth(8);
        assert!(options.validates());
        assert!(!options.isolates());
        assert_eq!(options.unknown, UnknownPolicy::Fail);
        assert_eq!(options.max_depth, 8);
    }
}
