//! # API-Documentation Renderers
//!
//! Renderers for the node types an API-reference pipeline adds on top of a
//! plain markdown tree: callable signatures, inline directives, definition
//! lists and parameter descriptions.
//!
//! | Tag                        | Renderer                  |
//! |----------------------------|---------------------------|
//! | `signature`                | [`Signature`]             |
//! | `directive`, `Directive`   | [`Directive`]             |
//! | `DefList`                  | [`DefList`]               |
//! | `Parameters`               | [`Parameters`]            |
//! | `ParameterNode`            | [`ParameterNodeRenderer`] |
//! | `Param`                    | [`Param`]                 |

mod deflist;
mod directive;
mod params;
mod signature;

pub use deflist::DefList;
pub use directive::{Directive, format_directive};
pub use params::{AnnotationStyle, Param, ParameterNodeRenderer, Parameters, format_parameter};
pub use signature::{PARAMETER_SEPARATOR, Signature};

use folio_core::RendererMap;

/// Tag of callable signatures.
pub const SIGNATURE: &str = "signature";
/// Tag of inline directives.
pub const DIRECTIVE: &str = "directive";
/// Legacy capitalized alias of [`DIRECTIVE`].
pub const DIRECTIVE_ALIAS: &str = "Directive";
/// Tag of definition lists.
pub const DEF_LIST: &str = "DefList";
/// Tag of parameter sequences.
pub const PARAMETERS: &str = "Parameters";
/// Tag of single parameters in signature form.
pub const PARAMETER_NODE: &str = "ParameterNode";
/// Tag of single parameters in detailed form.
pub const PARAM: &str = "Param";

/// The API-documentation renderer set.
pub fn renderers() -> RendererMap {
    RendererMap::new()
        .with(SIGNATURE, Signature)
        .with(DIRECTIVE, Directive)
        .with(DIRECTIVE_ALIAS, Directive)
        .with(DEF_LIST, DefList)
        .with(PARAMETERS, Parameters)
        .with(PARAMETER_NODE, ParameterNodeRenderer)
        .with(PARAM, Param::new())
}
