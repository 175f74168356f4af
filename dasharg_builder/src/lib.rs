//! Builder module for `dasharg`.
//! See [documentation root](https://docs.rs/dasharg/latest/dasharg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::OrExit;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
