//! Derive module for `clbind`.
//! See the [documentation root](https://docs.rs/clbind/latest/clbind/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveProgram;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive a command line binder over the annotated struct.
///
/// Struct attributes:
/// * `#[binder(program = "..", help_triggers = [..])]`, both optional.
/// * `#[command(key = "..", run = path, help = "..", usage = "..")]`, once per command.
///
/// Field attribute: `#[parameter(flag = "..", help = "..", toggle, commands = [..])]`.
/// The flag defaults to the field name.
/// Fields without `#[parameter]` are left alone.
///
/// Generates `clbind_binder()` and `clbind_run(&mut self)` on the struct.
#[proc_macro_derive(BinderProgram, attributes(binder, command, parameter))]
pub fn binder_program(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveProgram::try_from(derive_input) {
        Ok(program) => TokenStream2::from(program).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
