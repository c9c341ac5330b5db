//! Builder module for `cliscan`.
//! See [documentation root](https://docs.rs/cliscan/latest/cliscan/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
pub mod prelude;
mod scan;
mod tokenizer;

pub use api::*;
pub use model::*;
pub use parser::{Command, ConfigError, ParseError, Resolved};
pub use tokenizer::split_arguments;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
