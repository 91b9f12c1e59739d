//! `clbind` is a declarative command line binder for Rust.
//!
//! A `clbind` program is a set of named *commands* and typed *parameters*, declared against a *host* value.
//! The Cli selects (at most) one command, and writes parameter values into the host before that command runs.
//! `clbind` prioritizes the following design concerns:
//! * *Declarative binding*:
//! The user declares which host field each parameter binds to; `clbind` performs every `&str -> T` conversion.
//! * *Explicit write targets*:
//! Parameters bind through an accessor `Fn(&mut H) -> &mut T`, so the host value is always passed into the binding.
//! There is no global state.
//! * *Forgiving scans*:
//! A bad parameter value, or an unknown parameter, is reported while the remaining tokens are still processed.
//! Only command level problems (a second command, an unknown command) abort the invocation.
//! * *Basic help*:
//! Help lists the commands, or the parameters applicable to a single command, with aligned multi-line descriptions.
//! There are no colours, no shell completions, and no terminal width wrapping.
//!
//! # Usage
//! This page includes a demo on using `clbind`.
//! The equivalent program via the [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/deploy_derived.rs")]
//! ```
//! or via the builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/deploy.rs")]
//! ```
//!
//! Both of these generate the same Cli program (only the program names differ):
//! ```console
//! $ deploy --help
//!
//! The following commands are available in this program:
//!
//!         build - Build the project.
//!
//!         release - Release the build to a target.
//!                   Requires credentials.
//!
//!         Try "deploy [COMMAND] --help" for more information on individual commands.
//!
//! $ deploy release --help
//!
//!     release - Release the build to a target.
//!               Requires credentials.
//!     usage: deploy release -target NAME [-replicas N]
//!
//!         -verbose - Print more output.
//!
//!         -target - The release target.
//!
//!         -replicas - How many replicas to run.
//!
//!         -ratio - The rollout ratio, between 0 and 1.
//!
//! $ deploy -target prod release -ratio 0.25
//! Releasing 1 replicas to 'prod' at a 0.25 rollout.
//!
//! $ deploy -replicas many release
//! ERROR: Bad parameter value. ParameterName="replicas" Value="many"
//! Value must be a 16-bit unsigned integer
//! Releasing 1 replicas to 'staging'.
//!
//! $ deploy build release
//! ERROR: Multiple commands are not supported. Encountered second command "release".
//!
//! $ deploy
//! usage: deploy [COMMAND] [-PARAMETER VALUE]... [-TOGGLE]...
//! Try "deploy --help" for more information.
//! ```
//!
//! # Builder Api
//! Configure `clbind` by starting with a [`CommandLineBinder`] over your host type `H`.
//! Register commands via [`CommandLineBinder::command`] and parameters via [`CommandLineBinder::add`].
//! Build the [`Program`] with [`CommandLineBinder::build`] (or [`CommandLineBinder::build_program`] to handle the [`ConfigError`] yourself).
//!
//! A [`Command`] is keyed by the token which selects it, and runs an action `Fn(&mut H)` against the host.
//! A [`Parameter`] is named by its flag (used on the Cli as `-flag`), and binds through an accessor to a field of a [`Primitive`] type:
//! `bool`, `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `u64`, `f32`, `f64`, `String`, or `Option<T>` of any of these.
//!
//! Configuration errors are detected once, at build time:
//! * Empty command keys or parameter flags.
//! * Duplicate command keys or parameter flags.
//! * Command keys which begin with `-` (they could never be selected).
//! * Toggle parameters which are not `bool`.
//! * Parameters which apply to unregistered commands.
//! * Help triggers which are empty, or which shadow a command or parameter.
//!
//! ### Toggles
//! A toggle parameter ([`Parameter::toggle`]) is presence-only: `-flag` sets its `bool` to `true` and does not consume a value.
//! Any other `bool` parameter takes a value (`true`/`false`, case-insensitive).
//!
//! ### Applicable commands
//! A parameter may be restricted to a set of commands via [`Parameter::commands`].
//! This only affects the per-command help; the parameter is accepted on the Cli regardless of which command is selected.
//!
//! ### Defaults
//! `clbind` does not set defaults.
//! A parameter which is not specified (or which receives an invalid value) keeps whatever value the host already holds.
//! After an execution, [`ParameterDescriptor::was_set`] reports whether a parameter was assigned.
//!
//! ```
//! use clbind::{CommandLineBinder, Parameter};
//!
//! struct Tool {
//!     level: u8,
//! }
//!
//! // The default for the 'level' parameter is '3'.
//! let mut tool = Tool { level: 3 };
//! let mut program = CommandLineBinder::new("tool")
//!     .add(Parameter::new("level", |tool: &mut Tool| &mut tool.level))
//!     .build();
//!
//! program.execute(&mut tool, &["-level", "x"]);
//! assert_eq!(tool.level, 3);
//! assert!(!program.registry().lookup_parameter("level").unwrap().was_set());
//! ```
//!
//! # Cli Semantics
//! [`Program::execute`] scans the tokens from left to right:
//! * A help trigger (`--help` or `-h`, configurable via [`CommandLineBinder::help_triggers`]) stops the scan and prints help.
//! When a command was already selected, its help is shown; otherwise all commands are listed.
//! Nothing is invoked.
//! * A token starting with `-` names a parameter.
//! Unknown parameters are reported and skipped.
//! A non-toggle parameter takes the next token as its value, even if that token starts with `-`.
//! * Any other token selects a command.
//! Selecting a second command, or an unknown command, reports an error and aborts the scan.
//!
//! Parameters may appear before or after the command.
//! Once the scan completes, the selected command is invoked exactly once, after every parameter has been bound.
//! [`Program::execute`] returns an [`Outcome`]; it never panics on user input.
//!
//! Numbers and booleans are matched after trimming surrounding whitespace; strings are bound verbatim.
//!
//! # Features
//! * `tracing_debug`: Emit [tracing](https://docs.rs/tracing/latest/tracing/) debug events for the dispatch and help rendering.

pub mod derive;
pub use clbind_builder::*;
