use crate::load::{check_known, collect_attributes, incompatible_error};
use crate::model::{BindingType, DeriveParameter, DeriveValue, ParameterType};
use proc_macro2::Literal;
use quote::ToTokens;
use syn::spanned::Spanned;

const FIELD_ATTRIBUTES: [&str; 9] = [
    "command", "default", "help", "index", "name", "rest", "scanner", "short", "skip",
];

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new(
                    value.span(),
                    "Invalid - only named fields are supported.",
                ))
            }
        };
        let attributes = collect_attributes(&value.attrs)?;
        check_known(field_name.span(), &attributes, &FIELD_ATTRIBUTES)?;

        let present: Vec<&str> = FIELD_ATTRIBUTES
            .iter()
            .copied()
            .filter(|key| attributes.contains(key))
            .collect();
        let disallow = |antecedent: &str, others: &[&str]| -> Result<(), syn::Error> {
            match present.iter().find(|key| others.contains(*key)) {
                Some(key) => Err(incompatible_error(
                    &field_name,
                    format!("#[cliscan({antecedent})]"),
                    format!("#[cliscan({key})]"),
                )),
                None => Ok(()),
            }
        };

        let parameter_type = if attributes.contains("skip") {
            let others: Vec<&str> = FIELD_ATTRIBUTES
                .iter()
                .copied()
                .filter(|key| *key != "skip")
                .collect();
            disallow("skip", &others)?;
            ParameterType::Skip
        } else if let Some(name) = attributes.first("command") {
            disallow(
                "command",
                &["default", "index", "name", "rest", "scanner", "short"],
            )?;
            ParameterType::Command { name }
        } else if attributes.contains("rest") {
            disallow("rest", &["default", "index", "scanner", "short"])?;
            ParameterType::Rest
        } else if let Some(index) = attributes.first("index") {
            disallow("index", &["short"])?;
            ParameterType::Argument { index }
        } else {
            ParameterType::Option {
                short: attributes.first("short"),
            }
        };

        let cli_name = attributes.first("name").unwrap_or_else(|| DeriveValue {
            tokens: Literal::string(&kebab_case(&field_name)).into_token_stream(),
        });
        let binding_type = if attributes.contains("scanner") {
            BindingType::Scanner
        } else {
            BindingType::Scalar
        };

        Ok(DeriveParameter {
            field_name,
            cli_name,
            parameter_type,
            binding_type,
            help: attributes.first("help"),
            default: attributes.first("default"),
        })
    }
}

fn kebab_case(field_name: &syn::Ident) -> String {
    let name = field_name.to_string();
    name.trim_start_matches("r#").replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use proc_macro2::Span;
    use quote::quote;
    use rstest::rstest;
    use syn::parse_quote;

    #[test]
    fn construct_option() {
        // Setup
        let input: syn::Field = parse_quote! {
            my_field: usize
        };

        // Execute
        let parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                cli_name: string("my-field"),
                parameter_type: ParameterType::Option { short: None },
                binding_type: BindingType::Scalar,
                help: None,
                default: None,
            }
        );
    }

    #[test]
    fn construct_option_configured() {
        // Setup
        let input: syn::Field = parse_quote! {
            #[cliscan(short = 'v', help = "abc 123")]
            #[cliscan(name = "level", default = "4", scanner)]
            my_field: Level
        };

        // Execute
        let parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                cli_name: string("level"),
                parameter_type: ParameterType::Option {
                    short: Some(DeriveValue {
                        tokens: quote! { 'v' }
                    })
                },
                binding_type: BindingType::Scanner,
                help: Some(string("abc 123")),
                default: Some(string("4")),
            }
        );
    }

    #[test]
    fn construct_argument() {
        // Setup
        let input: syn::Field = parse_quote! {
            #[cliscan(index = 1, help = "abc 123")]
            my_field: String
        };

        // Execute
        let parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            parameter.parameter_type,
            ParameterType::Argument {
                index: DeriveValue {
                    tokens: quote! { 1 }
                }
            }
        );
        assert_eq!(parameter.help, Some(string("abc 123")));
    }

    #[test]
    fn construct_rest() {
        // Setup
        let input: syn::Field = parse_quote! {
            #[cliscan(rest)]
            input_files: Vec<String>
        };

        // Execute
        let parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(parameter.parameter_type, ParameterType::Rest);
        assert_eq!(parameter.cli_name, string("input-files"));
    }

    #[test]
    fn construct_command() {
        // Setup
        let input: syn::Field = parse_quote! {
            #[cliscan(command = "run", help = "abc 123")]
            run: Run
        };

        // Execute
        let parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            parameter.parameter_type,
            ParameterType::Command {
                name: string("run")
            }
        );
        assert_eq!(parameter.help, Some(string("abc 123")));
    }

    #[test]
    fn construct_skip() {
        // Setup
        let input: syn::Field = parse_quote! {
            #[cliscan(skip)]
            cache: Vec<u8>
        };

        // Execute
        let parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(parameter.parameter_type, ParameterType::Skip);
    }

    #[test]
    fn construct_raw_identifier() {
        let input: syn::Field = parse_quote! {
            r#type: String
        };

        let parameter = DeriveParameter::try_from(&input).unwrap();

        assert_eq!(parameter.cli_name, string("type"));
    }

    #[test]
    fn construct_unknown_attribute() {
        // Setup
        let input: syn::Field = parse_quote! {
            #[cliscan(option)]
            my_field: usize
        };

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "unknown attribute `#[cliscan(option)]`");
    }

    #[rstest]
    #[case(quote! { #[cliscan(rest, index = 0)] }, "#[cliscan(rest)]", "#[cliscan(index)]")]
    #[case(quote! { #[cliscan(rest, short = 'r')] }, "#[cliscan(rest)]", "#[cliscan(short)]")]
    #[case(quote! { #[cliscan(rest, default = "x")] }, "#[cliscan(rest)]", "#[cliscan(default)]")]
    #[case(quote! { #[cliscan(command = "x", short = 'r')] }, "#[cliscan(command)]", "#[cliscan(short)]")]
    #[case(quote! { #[cliscan(command = "x", rest)] }, "#[cliscan(command)]", "#[cliscan(rest)]")]
    #[case(quote! { #[cliscan(command = "x", scanner)] }, "#[cliscan(command)]", "#[cliscan(scanner)]")]
    #[case(quote! { #[cliscan(index = 0, short = 'r')] }, "#[cliscan(index)]", "#[cliscan(short)]")]
    #[case(quote! { #[cliscan(skip, help = "x")] }, "#[cliscan(skip)]", "#[cliscan(help)]")]
    #[case(quote! { #[cliscan(skip, short = 's')] }, "#[cliscan(skip)]", "#[cliscan(short)]")]
    #[case(quote! { #[cliscan(skip, scanner)] }, "#[cliscan(skip)]", "#[cliscan(scanner)]")]
    fn construct_incompatible(
        #[case] attributes: proc_macro2::TokenStream,
        #[case] left: &str,
        #[case] right: &str,
    ) {
        // Setup
        let input: syn::Field = parse_quote! {
            #attributes
            my_field: String
        };

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(
            error.to_string(),
            format!("field `my_field` cannot be both `{left}` and `{right}`").as_str()
        );
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
