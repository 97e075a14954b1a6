use std::collections::TryReserveError;
use thiserror::Error;

/// The one fatal condition of the parser: memory could not be obtained.
///
/// Raised by registration (growing an argument sequence) and by message rendering (growing the message buffer).
#[derive(Debug, Error)]
pub enum AllocationError {
    /// An argument sequence could not grow to hold a new argument.
    #[error("cannot register argument '{keyword}': {source}")]
    Registry {
        /// The keyword being registered.
        keyword: String,
        /// The underlying allocator error.
        source: TryReserveError,
    },
    /// The message buffer could not grow to hold a rendered message.
    #[error("cannot grow the message buffer to {requested} bytes: {source}")]
    Buffer {
        /// The capacity the buffer attempted to grow to.
        requested: usize,
        /// The underlying allocator error.
        source: TryReserveError,
    },
}

/// A recoverable problem with the Cli input.
///
/// The `Display` of each variant is exactly the detail printed on the `<program>: error: <detail>` line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A dashed token matched no registered long/short keyword.
    #[error("unrecognized arguments: {0}")]
    UnrecognizedArguments(String),
    /// Positional arguments were left unbound, listed in declaration order.
    #[error("the following arguments are required: {}", .0.join(", "))]
    MissingArguments(Vec<String>),
}

/// The outcome of [`ArgumentParser::parse`](./struct.ArgumentParser.html#method.parse).
///
/// For `Help` and `Error`, the rendered text is available via [`ArgumentParser::message`](./struct.ArgumentParser.html#method.message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatus {
    /// Every positional argument was bound.
    Ok,
    /// `-h` or `--help` was specified.
    Help,
    /// The Cli input could not be parsed.
    Error(ParseError),
}

impl std::fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseStatus::Ok => write!(f, "ok"),
            ParseStatus::Help => write!(f, "help"),
            ParseStatus::Error(error) => write!(f, "error: {error}"),
        }
    }
}
