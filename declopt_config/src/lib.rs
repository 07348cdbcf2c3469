//! Configuration tree for `declopt`.
//! See [documentation root](https://docs.rs/declopt/latest/declopt/index.html) for full details.
#![deny(missing_docs)]
mod node;
mod value;

pub use node::Node;
pub use value::{parse_bool, FromValue};
