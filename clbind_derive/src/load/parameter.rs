use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes};
use proc_macro2::Literal;
use quote::ToTokens;
use syn::ext::IdentExt;

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .expect("internal error - parameter fields must be named");
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident("parameter") {
                attributes = IntermediateAttributes::try_from(attribute)?;
                attributes.restrict(attribute, &["toggle"], &["flag", "help", "commands"])?;
            }
        }

        let flag = attributes.pairs.remove("flag").unwrap_or_else(|| DeriveValue {
            tokens: Literal::string(&field_name.unraw().to_string()).into_token_stream(),
        });
        let toggle = attributes.singletons.contains("toggle");

        if toggle && !is_boolean(&value.ty) {
            return Err(syn::Error::new_spanned(
                &value.ty,
                format!("Invalid - toggle parameter `{field_name}` must be declared `bool`."),
            ));
        }

        Ok(DeriveParameter {
            field_name,
            flag,
            help: attributes.pairs.remove("help"),
            toggle,
            commands: attributes.pairs.remove("commands"),
        })
    }
}

// `bool`, or `Option<bool>`.
fn is_boolean(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) if segment.ident == "bool" => true,
            Some(segment) if segment.ident == "Option" => match &segment.arguments {
                syn::PathArguments::AngleBracketed(arguments) => {
                    matches!(arguments.args.first(), Some(syn::GenericArgument::Type(inner)) if is_boolean(inner))
                }
                _ => false,
            },
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use quote::quote;
    use rstest::rstest;
    use syn::parse::Parser;

    #[test]
    fn construct_derive_parameter() {
        // Setup
        let field = field(quote! {
            #[parameter]
            apple: usize
        });

        // Execute
        let parameter = DeriveParameter::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            parameter,
            DeriveParameter {
                field_name: ident("apple"),
                flag: DeriveValue {
                    tokens: Literal::string("apple").into_token_stream(),
                },
                help: None,
                toggle: false,
                commands: None,
            }
        );
    }

    #[test]
    fn construct_derive_parameter_raw() {
        // Setup
        let field = field(quote! {
            #[parameter]
            r#type: String
        });

        // Execute
        let parameter = DeriveParameter::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            parameter.flag,
            DeriveValue {
                tokens: Literal::string("type").into_token_stream(),
            }
        );
    }

    #[test]
    fn construct_derive_parameter_with_attributes() {
        // Setup
        let field = field(quote! {
            #[parameter(flag = "n", help = "How many.", commands = ["build"])]
            count: u32
        });

        // Execute
        let parameter = DeriveParameter::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            parameter,
            DeriveParameter {
                field_name: ident("count"),
                flag: DeriveValue {
                    tokens: Literal::string("n").into_token_stream(),
                },
                help: Some(DeriveValue {
                    tokens: Literal::string("How many.").into_token_stream(),
                }),
                toggle: false,
                commands: Some(DeriveValue {
                    tokens: quote! { ["build"] },
                }),
            }
        );
    }

    #[rstest]
    #[case(quote! { #[parameter(toggle)] verbose: bool })]
    #[case(quote! { #[parameter(toggle)] verbose: std::primitive::bool })]
    #[case(quote! { #[parameter(toggle)] verbose: Option<bool> })]
    fn construct_derive_parameter_toggle(#[case] tokens: proc_macro2::TokenStream) {
        // Setup
        let field = field(tokens);

        // Execute
        let parameter = DeriveParameter::try_from(&field).unwrap();

        // Verify
        assert!(parameter.toggle);
    }

    #[rstest]
    #[case(quote! { #[parameter(toggle)] verbose: u8 }, "Invalid - toggle parameter `verbose` must be declared `bool`.")]
    #[case(quote! { #[parameter(toggle)] verbose: Option<String> }, "Invalid - toggle parameter `verbose` must be declared `bool`.")]
    #[case(quote! { #[parameter(short = 'v')] verbose: bool }, "Invalid - unknown key `short` in #[parameter(..)].")]
    fn construct_derive_parameter_invalid(
        #[case] tokens: proc_macro2::TokenStream,
        #[case] expected: &str,
    ) {
        // Setup
        let field = field(tokens);

        // Execute
        let error = DeriveParameter::try_from(&field).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }

    fn field(tokens: proc_macro2::TokenStream) -> syn::Field {
        syn::Field::parse_named.parse2(tokens).unwrap()
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
