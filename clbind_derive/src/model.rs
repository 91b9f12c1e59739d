use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The contents of a single `#[name(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveCommand {
    pub key: DeriveValue,
    pub run: DeriveValue,
    pub help: Option<DeriveValue>,
    pub usage: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub field_name: syn::Ident,
    pub flag: DeriveValue,
    pub help: Option<DeriveValue>,
    pub toggle: bool,
    pub commands: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveProgram {
    pub struct_name: syn::Ident,
    pub program: DeriveValue,
    pub help_triggers: Option<DeriveValue>,
    pub commands: Vec<DeriveCommand>,
    pub parameters: Vec<DeriveParameter>,
}
