mod attribute;
mod command;
mod parameter;
mod program;

fn missing_error(attribute: &syn::Attribute, key: &str) -> syn::Error {
    syn::Error::new_spanned(
        attribute,
        format!(
            "Invalid - #[{name}(..)] requires `{key} = ..`.",
            name = attribute_name(attribute),
        ),
    )
}

fn attribute_name(attribute: &syn::Attribute) -> String {
    attribute
        .path()
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default()
}
