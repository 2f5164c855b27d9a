//! Procedural macros for folio.
//!
//! Use through the `folio` crate with the `macros` feature enabled.

use proc_macro::TokenStream;

mod renderer;

/// Define a renderer from a function.
///
/// The function takes the node, and optionally the composer, and returns
/// `Result<Element, RenderError>`. It is replaced by a unit struct of the
/// same name implementing `folio::Renderer`, with a `TAG` constant.
///
/// Arguments, all optional:
/// - `tag = "..."`: the value of `TAG` (defaults to the function name)
/// - `name = "..."`: the struct name (defaults to the function name)
/// - `validate = path`: a `fn(&Node) -> Result<(), RenderError>` used as
///   `Renderer::validate`
///
/// ```rust,ignore
/// #[folio::renderer(tag = "thematicBreak", name = "Rule")]
/// fn rule(_node: &Node) -> Result<Element, RenderError> {
///     Ok(Tag::new("hr").into())
/// }
///
/// let overrides = RendererMap::new().with(Rule::TAG, Rule);
/// ```
#[proc_macro_attribute]
pub fn renderer(attr: TokenStream, item: TokenStream) -> TokenStream {
    renderer::renderer_impl(attr, item)
}
