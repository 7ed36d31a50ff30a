//! Procedural macros for the `wirebox_core` crate.
//!
//! This crate provides `#[derive(Inject)]`, which implements
//! `wirebox_core::apply::Inject` by filling every field tagged with
//! `#[inject]`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wirebox_core::prelude::*;
//!
//! #[derive(Default, Inject)]
//! struct Handler {
//!     #[inject]
//!     config: Option<Arc<Config>>,
//!     #[inject = "primary"]
//!     store: Option<Arc<dyn Store>>,
//!     hits: u64,
//! }
//! ```

mod crate_path;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Index, Lit, Member, Meta, parse_macro_input};

/// Derives `Inject` for a struct.
///
/// # Field Attributes
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | `#[inject]` | The field is filled |
/// | `#[inject = "key"]` | The field is filled; the key is reserved |
/// | `#[inject = ""]` | The field is ignored |
/// | none | The field is ignored |
///
/// Filled fields must implement `wirebox_core::apply::Slot`, which in
/// practice means `Option<Arc<T>>`. They are filled in declaration order.
///
/// Deriving for an enum or union produces an implementation that does
/// nothing.
///
/// # Generated Code
///
/// For a struct like:
/// ```ignore
/// #[derive(Inject)]
/// struct Handler {
///     #[inject]
///     config: Option<Arc<Config>>,
///     hits: u64,
/// }
/// ```
///
/// The macro generates:
/// ```ignore
/// impl wirebox_core::apply::Inject for Handler {
///     fn inject(
///         &mut self,
///         injector: &wirebox_core::injector::Injector<'_>,
///     ) -> Result<(), wirebox_core::error::InjectError> {
///         wirebox_core::apply::Slot::fill(&mut self.config, injector)?;
///         Ok(())
///     }
/// }
/// ```
#[proc_macro_derive(Inject, attributes(inject))]
pub fn derive_inject(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let wc = crate_path::wirebox_core_path();

    let members = match &input.data {
        Data::Struct(data) => eligible_members(&data.fields)?,
        // Only struct fields can be injected.
        Data::Enum(_) | Data::Union(_) => Vec::new(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let injector = if members.is_empty() {
        quote!(_injector)
    } else {
        quote!(injector)
    };

    let fills = members.iter().map(|(member, span)| {
        quote_spanned! {*span=>
            #wc::apply::Slot::fill(&mut self.#member, injector)?;
        }
    });

    Ok(quote! {
        impl #impl_generics #wc::apply::Inject for #name #ty_generics #where_clause {
            fn inject(
                &mut self,
                #injector: &#wc::injector::Injector<'_>,
            ) -> ::core::result::Result<(), #wc::error::InjectError> {
                #(#fills)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Returns the fields to fill, in declaration order, with the span used to
/// report a field type that is not a slot.
fn eligible_members(fields: &Fields) -> syn::Result<Vec<(Member, Span)>> {
    let mut members = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        if !is_injected(&field.attrs)? {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: u32::try_from(index).map_err(|_| {
                    syn::Error::new_spanned(field, "too many fields to inject")
                })?,
                span: field.span(),
            }),
        };
        members.push((member, field.ty.span()));
    }

    Ok(members)
}

/// Reads the `inject` attributes on a field.
///
/// A field is injected if any `#[inject]` or non-empty `#[inject = "key"]`
/// is present.
fn is_injected(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut injected = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
        match &attr.meta {
            Meta::Path(_) => injected = true,
            Meta::NameValue(name_value) => {
                let Expr::Lit(expr) = &name_value.value else {
                    return Err(syn::Error::new_spanned(
                        &name_value.value,
                        "expected a string literal: #[inject = \"key\"]",
                    ));
                };
                let Lit::Str(key) = &expr.lit else {
                    return Err(syn::Error::new_spanned(
                        &expr.lit,
                        "expected a string literal: #[inject = \"key\"]",
                    ));
                };
                if !key.value().is_empty() {
                    injected = true;
                }
            }
            Meta::List(list) => {
                return Err(syn::Error::new_spanned(
                    list,
                    "unsupported form, use #[inject] or #[inject = \"key\"]",
                ));
            }
        }
    }

    Ok(injected)
}
