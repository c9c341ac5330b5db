use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveParser, DeriveValue};

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program_name,
            about,
            dispatch_only,
            parameters,
        } = value;
        let program_name = program_name.tokens;
        let about = about.map(|DeriveValue { tokens }| {
            quote! {
                let clp = clp.about(#tokens);
            }
        });
        let dispatch_only = if dispatch_only {
            quote! {
                let clp = clp.dispatch_only();
            }
        } else {
            TokenStream2::default()
        };
        let fields: Vec<TokenStream2> = parameters
            .into_iter()
            .map(|parameter| parameter.generate())
            .collect();

        quote! {
            impl<'a> CliTarget<'a> for #struct_name {
                fn setup(&'a mut self, parser: CommandLineParser<'a>) -> CommandLineParser<'a> {
                    let clp = parser;
                    #about
                    #( #fields )*
                    #dispatch_only
                    clp
                }
            }

            impl #struct_name {
                /// Parse the command line into a new value, alongside the names of the invoked command path.
                /// Exits the process on a help request, a configuration error or a parse error.
                pub fn cli_parse() -> (#struct_name, Vec<String>) {
                    let mut target = <#struct_name as Default>::default();
                    let path = {
                        let clp = CommandLineParser::new(#program_name);
                        let mut command = CliTarget::setup(&mut target, clp).build();
                        command.parse()
                    };
                    (target, path)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BindingType, DeriveParameter, ParameterType};
    use crate::test::assert_contains;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn render_parser_empty() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("my_struct"),
            program_name: DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            },
            about: None,
            dispatch_only: false,
            parameters: vec![],
        };

        // Execute
        let token_stream = TokenStream2::from(parser).to_string();

        // Verify
        assert_contains!(token_stream, "CliTarget < 'a > for my_struct");
        assert_contains!(
            token_stream,
            "{ let clp = parser ; clp }"
        );
        assert_contains!(
            token_stream,
            "let clp = CommandLineParser :: new (env ! (\"CARGO_CRATE_NAME\")) ;"
        );
        assert_contains!(
            token_stream,
            "pub fn cli_parse () -> (my_struct , Vec < String >)"
        );
    }

    #[test]
    fn render_parser() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("my_struct"),
            program_name: string("abc"),
            about: Some(string("def 123")),
            dispatch_only: true,
            parameters: vec![DeriveParameter {
                field_name: ident("my_field"),
                cli_name: string("my-field"),
                parameter_type: ParameterType::Option { short: None },
                binding_type: BindingType::Scalar,
                help: None,
                default: None,
            }],
        };

        // Execute
        let token_stream = TokenStream2::from(parser).to_string();

        // Verify
        assert_contains!(
            token_stream,
            "{ let clp = parser ; let clp = clp . about (\"def 123\") ; let clp = clp . add (Parameter :: option (Scalar :: new (& mut self . my_field) , \"my-field\" , None)) ; let clp = clp . dispatch_only () ; clp }"
        );
        assert_contains!(token_stream, "let clp = CommandLineParser :: new (\"abc\") ;");
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
