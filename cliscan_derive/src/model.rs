use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub(crate) tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The `#[cliscan(..)]` attributes, before interpretation.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub(crate) singletons: HashSet<String>,
    pub(crate) pairs: HashMap<String, Vec<DeriveValue>>,
}

impl IntermediateAttributes {
    pub(crate) fn merge(&mut self, other: IntermediateAttributes) {
        self.singletons.extend(other.singletons);

        for (key, values) in other.pairs {
            self.pairs.entry(key).or_default().extend(values);
        }
    }

    pub(crate) fn first(&self, key: &str) -> Option<DeriveValue> {
        self.pairs
            .get(key)
            .and_then(|values| values.first())
            .cloned()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.singletons.contains(key) || self.pairs.contains_key(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingType {
    Scalar,
    Scanner,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParameterType {
    Option { short: Option<DeriveValue> },
    Argument { index: DeriveValue },
    Rest,
    Command { name: DeriveValue },
    Skip,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub(crate) field_name: syn::Ident,
    pub(crate) cli_name: DeriveValue,
    pub(crate) parameter_type: ParameterType,
    pub(crate) binding_type: BindingType,
    pub(crate) help: Option<DeriveValue>,
    pub(crate) default: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub(crate) struct_name: syn::Ident,
    pub(crate) program_name: DeriveValue,
    pub(crate) about: Option<DeriveValue>,
    pub(crate) dispatch_only: bool,
    pub(crate) parameters: Vec<DeriveParameter>,
}
