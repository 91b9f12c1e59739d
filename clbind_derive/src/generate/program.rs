use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveProgram;

impl From<DeriveProgram> for TokenStream2 {
    fn from(value: DeriveProgram) -> Self {
        let DeriveProgram {
            struct_name,
            program,
            help_triggers,
            commands,
            parameters,
        } = value;
        let program = program.tokens;
        let mut statements = Vec::default();

        if let Some(help_triggers) = help_triggers {
            let help_triggers = help_triggers.tokens;
            statements.push(quote! {
                clb = clb.help_triggers(#help_triggers);
            });
        }

        statements.extend(commands.into_iter().map(|command| command.generate()));
        statements.extend(
            parameters
                .into_iter()
                .map(|parameter| parameter.generate(&struct_name)),
        );

        let clb = if statements.is_empty() {
            quote! {
                let clb = ::clbind::CommandLineBinder::new(#program);
            }
        } else {
            quote! {
                let mut clb = ::clbind::CommandLineBinder::new(#program);
                #( #statements )*
            }
        };

        quote! {
            impl #struct_name {
                pub fn clbind_binder() -> ::clbind::CommandLineBinder<'static, #struct_name> {
                    #clb
                    clb
                }

                pub fn clbind_run(&mut self) -> ::clbind::Outcome {
                    Self::clbind_binder().build().run(self)
                }
            }
        }
    }
}
