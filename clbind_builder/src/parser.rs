mod dispatch;
mod interface;
mod middleware;
mod printer;

pub(crate) use dispatch::*;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
