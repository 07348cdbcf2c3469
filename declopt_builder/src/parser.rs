mod base;
mod format;
mod interface;
mod middleware;
mod printer;
mod validate;

pub use base::*;
pub use format::*;
pub(crate) use interface::*;
pub use middleware::*;
pub use validate::*;
