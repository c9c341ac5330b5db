use crate::model::{BindingType, DeriveParameter, DeriveValue, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

impl DeriveParameter {
    /// Render the statement(s) adding this field to the parser `clp`, within `CliTarget::setup`.
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            cli_name,
            parameter_type,
            binding_type,
            help,
            default,
        } = self;
        let cli_name = cli_name.tokens;
        let binding = match binding_type {
            BindingType::Scalar => quote! { Scalar::new(&mut self.#field_name) },
            BindingType::Scanner => quote! { Custom::new(&mut self.#field_name) },
        };
        let mut modifiers: Vec<TokenStream2> = Vec::default();

        if let Some(DeriveValue { tokens }) = &help {
            modifiers.push(quote! { .help(#tokens) });
        }

        if let Some(DeriveValue { tokens }) = &default {
            modifiers.push(quote! { .default(#tokens) });
        }

        match parameter_type {
            ParameterType::Option { short } => {
                let short = flatten(short);
                quote! {
                    let clp = clp.add(Parameter::option(#binding, #cli_name, #short) #( #modifiers )*);
                }
            }
            ParameterType::Argument { index } => {
                let index = index.tokens;
                quote! {
                    let clp = clp.add(Parameter::argument(#binding, #cli_name).index(#index) #( #modifiers )*);
                }
            }
            ParameterType::Rest => {
                quote! {
                    let clp = clp.add(Parameter::rest(&mut self.#field_name, #cli_name) #( #modifiers )*);
                }
            }
            ParameterType::Command { name } => {
                let name = name.tokens;
                let field_target = format_ident!("{field_name}_target");
                let about = help.map(|DeriveValue { tokens }| quote! { .about(#tokens) });
                quote! {
                    let #field_target = &mut self.#field_name;
                    let clp = clp.command(#name, move |sub| CliTarget::setup(#field_target, sub #about));
                }
            }
            ParameterType::Skip => TokenStream2::default(),
        }
    }
}

fn flatten(value: Option<DeriveValue>) -> TokenStream2 {
    value.map_or_else(
        || quote! { None },
        |s| {
            let tokens = s.tokens;
            quote! { Some(#tokens) }
        },
    )
}
