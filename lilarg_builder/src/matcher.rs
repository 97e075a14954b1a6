mod core;
mod model;

pub(crate) use self::core::*;
pub use model::{ArgumentId, Descriptor};
pub(crate) use model::Registry;
