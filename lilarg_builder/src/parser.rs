mod base;
mod buffer;
mod printer;

pub use base::*;
pub(crate) use buffer::*;
pub(crate) use printer::*;
