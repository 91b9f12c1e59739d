use crate::load::attribute_name;
use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        // A bare `#[parameter]` carries no keys.
        if let syn::Meta::Path(_) = &value.meta {
            return Ok(Self::default());
        }

        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, DeriveValue> = HashMap::default();

        for expression in expressions {
            match &expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream().to_string();
                    let right = DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    };

                    if pairs.insert(left.clone(), right).is_some() {
                        return Err(syn::Error::new_spanned(
                            &assignment.left,
                            format!("Invalid - duplicate attribute `{left}`."),
                        ));
                    }
                }
                syn::Expr::Path(syn::ExprPath { path, .. }) if path.get_ident().is_some() => {
                    singletons.insert(path.to_token_stream().to_string());
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Invalid - unparseable attribute `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

impl IntermediateAttributes {
    /// Reject any key outside of the allowed singletons and pairs.
    pub(crate) fn restrict(
        &self,
        attribute: &syn::Attribute,
        singletons: &[&str],
        pairs: &[&str],
    ) -> Result<(), syn::Error> {
        let mut unknown: Vec<&String> = self
            .singletons
            .iter()
            .filter(|s| !singletons.contains(&s.as_str()))
            .chain(self.pairs.keys().filter(|p| !pairs.contains(&p.as_str())))
            .collect();
        unknown.sort();

        match unknown.first() {
            Some(key) => Err(syn::Error::new_spanned(
                attribute,
                format!(
                    "Invalid - unknown key `{key}` in #[{name}(..)].",
                    name = attribute_name(attribute),
                ),
            )),
            None => Ok(()),
        }
    }
}
