//! Locates `wirebox_core` from the crate that invokes the derive.
//!
//! A direct dependency wins, under whatever name it was given in
//! `Cargo.toml`. Inside `wirebox_core` itself the crate aliases itself with
//! `extern crate self as wirebox_core`. A crate that only depends on the
//! `wirebox` umbrella reaches the core crate through its re-export.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

const CORE: &str = "wirebox_core";
const UMBRELLA: &str = "wirebox";

/// Returns the token path for `wirebox_core` in the consuming crate.
pub(crate) fn wirebox_core_path() -> TokenStream {
    match crate_name(CORE) {
        Ok(FoundCrate::Name(name)) => {
            let core = format_ident!("{}", name);
            quote!(#core)
        }
        Ok(FoundCrate::Itself) => quote!(wirebox_core),
        // The umbrella depends on the core crate directly, so only a
        // dependent of the umbrella gets here with a match.
        Err(_) => match crate_name(UMBRELLA) {
            Ok(FoundCrate::Name(name)) => {
                let umbrella = format_ident!("{}", name);
                quote!(#umbrella::wirebox_core)
            }
            Ok(FoundCrate::Itself) | Err(_) => quote!(wirebox_core),
        },
    }
}
