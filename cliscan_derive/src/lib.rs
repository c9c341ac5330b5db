//! Derive macro for `cliscan`.
//! See [the derive module](https://docs.rs/cliscan/latest/cliscan/derive/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Implement `CliTarget` and `cli_parse` for a struct with named fields.
#[proc_macro_derive(CliParser, attributes(cliscan))]
pub fn cli_parser(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(ast) {
        Ok(parser) => TokenStream2::from(parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
