//! The `#[renderer]` attribute.
//!
//! Turns a plain rendering function into a unit struct implementing
//! `folio::Renderer`, so it can be registered like any hand-written
//! renderer.

use proc_macro::TokenStream;
use quote::quote;
use syn::{FnArg, Ident, ItemFn, LitStr, Path, ReturnType, Token, parse::Parse, parse_macro_input};

/// Arguments for the `#[renderer]` macro.
pub(crate) struct RendererArgs {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub validate: Option<Path>,
}

impl Parse for RendererArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut tag = None;
        let mut name = None;
        let mut validate = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "tag" => {
                    let lit: LitStr = input.parse()?;
                    tag = Some(lit.value());
                }
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                "validate" => {
                    validate = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(RendererArgs {
            tag,
            name,
            validate,
        })
    }
}

/// Implementation of the `#[renderer]` macro.
pub fn renderer_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RendererArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let inputs = &input.sig.inputs;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "Renderer function must not be async")
            .to_compile_error()
            .into();
    }

    let output = match &input.sig.output {
        ReturnType::Type(_, ty) => ty,
        ReturnType::Default => {
            return syn::Error::new_spanned(
                &input.sig,
                "Renderer function must return Result<Element, RenderError>",
            )
            .to_compile_error()
            .into();
        }
    };

    if inputs.is_empty() || inputs.len() > 2 {
        return syn::Error::new_spanned(
            inputs,
            "Renderer function must take (node: &Node) or (node: &Node, cx: &Composer<'_>)",
        )
        .to_compile_error()
        .into();
    }
    if let Some(receiver @ FnArg::Receiver(_)) = inputs.first() {
        return syn::Error::new_spanned(receiver, "Renderer function cannot have self parameter")
            .to_compile_error()
            .into();
    }

    let struct_name = if let Some(ref custom_name) = args.name {
        Ident::new(custom_name, fn_name.span())
    } else {
        fn_name.clone()
    };
    let tag = args.tag.unwrap_or_else(|| fn_name.to_string());
    let docs = input.attrs.iter().filter(|attr| attr.path().is_ident("doc"));

    let call = if inputs.len() == 2 {
        quote! { __inner(__node, __cx) }
    } else {
        quote! { { let _ = __cx; __inner(__node) } }
    };

    let validate_impl = args.validate.map(|path| {
        quote! {
            fn validate(
                &self,
                __node: &::folio::Node,
            ) -> ::core::result::Result<(), ::folio::RenderError> {
                #path(__node)
            }
        }
    });

    let expanded = quote! {
        #(#docs)*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Auto-generated Renderer from `#[folio::renderer]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl #struct_name {
            /// The node type tag this renderer is meant for.
            pub const TAG: &'static str = #tag;
        }

        impl ::folio::Renderer for #struct_name {
            fn render(
                &self,
                __node: &::folio::Node,
                __cx: &::folio::Composer<'_>,
            ) -> ::core::result::Result<::folio::Element, ::folio::RenderError> {
                fn __inner(#inputs) -> #output #fn_block
                #call
            }

            #validate_impl
        }
    };

    TokenStream::from(expanded)
}
