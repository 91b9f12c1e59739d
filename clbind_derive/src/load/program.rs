use crate::model::{DeriveCommand, DeriveParameter, DeriveProgram, DeriveValue, IntermediateAttributes};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveProgram {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - BinderProgram cannot be derived on a generic struct.",
            ));
        }

        let mut program = None;
        let mut help_triggers = None;
        let mut commands = Vec::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident("binder") {
                let mut attributes = IntermediateAttributes::try_from(attribute)?;
                attributes.restrict(attribute, &[], &["program", "help_triggers"])?;
                program = attributes.pairs.remove("program");
                help_triggers = attributes.pairs.remove("help_triggers");
            } else if attribute.path().is_ident("command") {
                commands.push(DeriveCommand::try_from(attribute)?);
            }
        }

        let parameters = match &value.data {
            syn::Data::Struct(ds) => match &ds.fields {
                syn::Fields::Named(fields) => fields
                    .named
                    .iter()
                    .filter(|field| {
                        field
                            .attrs
                            .iter()
                            .any(|attribute| attribute.path().is_ident("parameter"))
                    })
                    .map(DeriveParameter::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
                syn::Fields::Unit => Vec::default(),
                syn::Fields::Unnamed(fields) => {
                    return Err(syn::Error::new_spanned(
                        fields,
                        "Invalid - BinderProgram requires named fields.",
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - BinderProgram may only be derived on a struct.",
                ));
            }
        };

        Ok(DeriveProgram {
            struct_name: value.ident,
            program: program.unwrap_or_else(|| DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            }),
            help_triggers,
            commands,
            parameters,
        })
    }
}
