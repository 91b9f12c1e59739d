use crate::model::DeriveCommand;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveCommand {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveCommand {
            key,
            run,
            help,
            usage,
        } = self;
        let key = key.tokens;
        let run = run.tokens;
        let help = help.map(|help| {
            let help = help.tokens;
            quote! { .help(#help) }
        });
        let usage = usage.map(|usage| {
            let usage = usage.tokens;
            quote! { .usage(#usage) }
        });

        quote! {
            clb = clb.command(::clbind::Command::new(#key, #run) #help #usage);
        }
    }
}
