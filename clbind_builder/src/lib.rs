//! Builder module for `clbind`.
//! See the [documentation root](https://docs.rs/clbind/latest/clbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod coerce;
mod constant;
mod model;
mod parser;
mod registry;

pub use api::*;
pub use coerce::{coerce, CoercionError, Primitive};
pub use model::*;
pub use parser::{Outcome, Program};
pub use registry::{BindError, CommandDescriptor, ConfigError, ParameterDescriptor, Registry};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
