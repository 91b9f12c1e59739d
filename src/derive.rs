//! Derive Api for `clbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a host struct `S` with `#[derive(BinderProgram)]`.
//! This generates:
//! * `S::clbind_binder() -> CommandLineBinder<'static, S>`, the configured (but not yet built) binder.
//! * `S::clbind_run(&mut self) -> Outcome`, which builds the binder and runs it against the Cli arguments.
//!
//! ```no_run
#![doc = include_str!("../demos/deploy_derived.rs")]
//! ```
//!
//! ### Program Configuration
//! ```console
//! #[binder(program = "..", help_triggers = [..])]
//! ```
//! The program name defaults to the crate name.
//! The help triggers default to `["--help", "-h"]`.
//!
//! ### Command Configuration
//! Commands are declared on the struct, one attribute per command, in the order they are listed in help.
//! ```console
//! #[command(key = "..", run = Self::method, help = "..", usage = "..")]
//! ```
//! `key` and `run` are required.
//! `run` is any expression implementing `Fn(&mut S)`, typically a method `fn method(&mut self)`.
//!
//! ### Parameter Configuration
//! Parameters are declared on the struct fields.
//! Fields without `#[parameter]` are not parameters.
//! ```console
//! #[parameter(flag = "..", help = "..", toggle, commands = [..])]
//! ```
//! The flag defaults to the field name.
//! The field type must be a [`Primitive`](crate::Primitive).
//!
//! ```
//! use clbind::derive::*;
//! use clbind::Outcome;
//!
//! #[derive(Default, BinderProgram)]
//! #[binder(program = "tool")]
//! #[command(key = "build", run = Self::build)]
//! struct Tool {
//!     #[parameter(flag = "n")]
//!     count: u32,
//!     built: Vec<u32>,
//! }
//!
//! impl Tool {
//!     fn build(&mut self) {
//!         self.built.push(self.count);
//!     }
//! }
//!
//! let mut tool = Tool::default();
//! let mut program = Tool::clbind_binder().build();
//! let outcome = program.execute(&mut tool, &["build", "-n", "2"]);
//!
//! assert_eq!(outcome, Outcome::Invoked("build".to_string()));
//! assert_eq!(tool.built, vec![2]);
//! ```

pub use clbind_derive::*;
