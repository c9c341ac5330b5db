mod attribute;
mod parameter;
mod parser;

use crate::model::IntermediateAttributes;

/// Collect every `#[cliscan(..)]` attribute, ignoring all others.
fn collect_attributes(attributes: &[syn::Attribute]) -> Result<IntermediateAttributes, syn::Error> {
    let mut collected = IntermediateAttributes::default();

    for attribute in attributes {
        if attribute.path().is_ident("cliscan") {
            collected.merge(IntermediateAttributes::try_from(attribute)?);
        }
    }

    Ok(collected)
}

fn check_known(
    span: proc_macro2::Span,
    attributes: &IntermediateAttributes,
    known: &[&str],
) -> Result<(), syn::Error> {
    let mut keys: Vec<&String> = attributes
        .singletons
        .iter()
        .chain(attributes.pairs.keys())
        .filter(|key| !known.contains(&key.as_str()))
        .collect();
    keys.sort();

    match keys.first() {
        Some(key) => Err(syn::Error::new(
            span,
            format!("Invalid - unknown attribute `#[cliscan({key})]`."),
        )),
        None => Ok(()),
    }
}

fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field `{field_name}` cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}
