use crate::model::DeriveParameter;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    pub(crate) fn generate(self, parent: &syn::Ident) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            flag,
            help,
            toggle,
            commands,
        } = self;
        let flag = flag.tokens;
        let toggle = if toggle {
            Some(quote! { .toggle() })
        } else {
            None
        };
        let help = help.map(|help| {
            let help = help.tokens;
            quote! { .help(#help) }
        });
        let commands = commands.map(|commands| {
            let commands = commands.tokens;
            quote! { .commands(#commands) }
        });

        quote! {
            clb = clb.add(::clbind::Parameter::new(#flag, |host: &mut #parent| &mut host.#field_name) #toggle #help #commands);
        }
    }
}
