use crate::load::{check_known, collect_attributes};
use crate::model::{DeriveParameter, DeriveParser, DeriveValue};
use quote::quote;
use syn::spanned::Spanned;

const STRUCT_ATTRIBUTES: [&str; 3] = ["about", "dispatch_only", "program"];

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = collect_attributes(&value.attrs)?;
        check_known(value.ident.span(), &attributes, &STRUCT_ATTRIBUTES)?;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                value.generics.span(),
                "Invalid - generic parameter structs are not supported.",
            ));
        }

        let program_name = attributes.first("program").unwrap_or_else(|| DeriveValue {
            tokens: quote! { env!("CARGO_CRATE_NAME") },
        });

        let parameters = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveParameter::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - only structs with named fields are supported.",
                ))
            }
        };

        Ok(DeriveParser {
            struct_name: value.ident.clone(),
            program_name,
            about: attributes.first("about"),
            dispatch_only: attributes.singletons.contains("dispatch_only"),
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BindingType, ParameterType};
    use crate::test::assert_contains;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn construct_parser_empty() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, CliParser)]
                struct Parameters { }
            "#,
        )
        .unwrap();

        // Execute
        let parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            parser,
            DeriveParser {
                struct_name: ident("Parameters"),
                program_name: DeriveValue {
                    tokens: quote! { env!("CARGO_CRATE_NAME") },
                },
                about: None,
                dispatch_only: false,
                parameters: Vec::default(),
            }
        );
    }

    #[test]
    fn construct_parser_unit() {
        let input: syn::DeriveInput = syn::parse_str("struct Parameters;").unwrap();

        let parser = DeriveParser::try_from(input).unwrap();

        assert!(parser.parameters.is_empty());
    }

    #[test]
    fn construct_parser() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, CliParser)]
                #[cliscan(program = "abc", about = "def 123", dispatch_only)]
                struct Parameters {
                    #[cliscan(short = 'v')]
                    verbose: bool,
                    #[cliscan(command = "run")]
                    run: Run,
                }
            "#,
        )
        .unwrap();

        // Execute
        let parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            parser,
            DeriveParser {
                struct_name: ident("Parameters"),
                program_name: string("abc"),
                about: Some(string("def 123")),
                dispatch_only: true,
                parameters: vec![
                    DeriveParameter {
                        field_name: ident("verbose"),
                        cli_name: string("verbose"),
                        parameter_type: ParameterType::Option {
                            short: Some(DeriveValue {
                                tokens: quote! { 'v' },
                            }),
                        },
                        binding_type: BindingType::Scalar,
                        help: None,
                        default: None,
                    },
                    DeriveParameter {
                        field_name: ident("run"),
                        cli_name: string("run"),
                        parameter_type: ParameterType::Command { name: string("run") },
                        binding_type: BindingType::Scalar,
                        help: None,
                        default: None,
                    },
                ],
            }
        );
    }

    #[test]
    fn construct_parser_field_error() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                struct Parameters {
                    #[cliscan(rest, short = 'r')]
                    files: Vec<String>,
                }
            "#,
        )
        .unwrap();

        // Execute
        let error = DeriveParser::try_from(input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "cannot be both");
    }

    #[test]
    fn construct_parser_unknown_attribute() {
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[cliscan(name = "abc")]
                struct Parameters { }
            "#,
        )
        .unwrap();

        let error = DeriveParser::try_from(input).unwrap_err();

        assert_contains!(error.to_string(), "unknown attribute `#[cliscan(name)]`");
    }

    #[test]
    fn construct_parser_enum() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str("enum Parameters { A, B }").unwrap();

        // Execute
        let error = DeriveParser::try_from(input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "only structs with named fields");
    }

    #[test]
    fn construct_parser_tuple() {
        let input: syn::DeriveInput = syn::parse_str("struct Parameters(u32);").unwrap();

        let error = DeriveParser::try_from(input).unwrap_err();

        assert_contains!(error.to_string(), "only structs with named fields");
    }

    #[test]
    fn construct_parser_generic() {
        let input: syn::DeriveInput =
            syn::parse_str("struct Parameters<T> { value: T }").unwrap();

        let error = DeriveParser::try_from(input).unwrap_err();

        assert_contains!(error.to_string(), "generic parameter structs");
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn string(value: &str) -> DeriveValue {
        DeriveValue {
            tokens: Literal::string(value).into_token_stream(),
        }
    }
}
