//! Builder module for `declopt`.
//! See [documentation root](https://docs.rs/declopt/latest/declopt/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{
    ConfigError, DeclarationError, OptionParser, ParseError, ParserResult, TabExpander, WordWrapper,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
