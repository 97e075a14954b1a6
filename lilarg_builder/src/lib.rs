//! Builder module for `lilarg`.
//! See [documentation root](https://docs.rs/lilarg/latest/lilarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use matcher::{ArgumentId, Descriptor};
pub use model::*;
pub use parser::{AllocationError, ParseError, ParseStatus};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
