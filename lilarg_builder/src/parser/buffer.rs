use std::fmt::{self, Write};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::INITIAL_BUFFER_SIZE;
use crate::parser::AllocationError;

/// Append formatted text onto a `MessageBuffer`, evaluating to the `Result` of the bytes written.
macro_rules! append {
    ($buffer:expr, $($arg:tt)*) => {
        $buffer.append(format_args!($($arg)*))
    };
}

pub(crate) use append;

/// Counts the formatted length without writing anything.
#[derive(Default)]
struct Measure(usize);

impl Write for Measure {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// The text buffer holding the most recent usage/help/error message.
///
/// Capacity is managed explicitly: it starts at `INITIAL_BUFFER_SIZE` on first use and doubles until each append fits.
/// It never shrinks, not even on `clear`.
#[derive(Debug, Default)]
pub(crate) struct MessageBuffer {
    text: String,
    capacity: usize,
}

impl MessageBuffer {
    /// Append the formatted `arguments`, returning the number of bytes written.
    pub(crate) fn append(&mut self, arguments: fmt::Arguments<'_>) -> Result<usize, AllocationError> {
        // 1. Measure.
        let mut measure = Measure::default();
        measure
            .write_fmt(arguments)
            .expect("internal error - message arguments must format");
        let written = measure.0;

        // 2. Grow.
        self.reserve(self.text.len() + written)?;

        // 3. Write, without any further allocation.
        self.text
            .write_fmt(arguments)
            .expect("internal error - message arguments must format");
        Ok(written)
    }

    /// Reset the write position to zero, retaining the capacity.
    pub(crate) fn clear(&mut self) {
        self.text.clear();
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    fn reserve(&mut self, required: usize) -> Result<(), AllocationError> {
        let mut capacity = if self.capacity == 0 {
            INITIAL_BUFFER_SIZE
        } else {
            self.capacity
        };

        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }

        if capacity > self.text.capacity() {
            self.text
                .try_reserve_exact(capacity - self.text.len())
                .map_err(|source| AllocationError::Buffer {
                    requested: capacity,
                    source,
                })?;
        }

        #[cfg(feature = "tracing_debug")]
        {
            if capacity != self.capacity {
                debug!(
                    "Message buffer grows from {} to {capacity} bytes (required: {required}).",
                    self.capacity
                );
            }
        }

        self.capacity = capacity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty() {
        let buffer = MessageBuffer::default();

        assert_eq!(buffer.as_str(), "");
        assert_eq!(buffer.capacity(), 0);
    }

    #[test]
    fn append_initial() {
        let mut buffer = MessageBuffer::default();

        let written = append!(buffer, "usage: {}", "program").unwrap();

        assert_eq!(written, 14);
        assert_eq!(buffer.as_str(), "usage: program");
        assert_eq!(buffer.capacity(), INITIAL_BUFFER_SIZE);
    }

    #[test]
    fn append_concatenates() {
        let mut buffer = MessageBuffer::default();

        append!(buffer, "a").unwrap();
        append!(buffer, " {}", 1).unwrap();
        append!(buffer, "{}", "\n").unwrap();

        assert_eq!(buffer.as_str(), "a 1\n");
    }

    #[test]
    fn append_empty() {
        let mut buffer = MessageBuffer::default();

        assert_eq!(append!(buffer, "").unwrap(), 0);
        assert_eq!(buffer.as_str(), "");
        assert_eq!(buffer.capacity(), INITIAL_BUFFER_SIZE);
    }

    #[test]
    fn append_counts_bytes() {
        let mut buffer = MessageBuffer::default();

        assert_eq!(append!(buffer, "{}", "ü").unwrap(), 2);
    }

    #[rstest]
    #[case(1, 256)]
    #[case(255, 256)]
    #[case(256, 256)]
    #[case(257, 512)]
    #[case(512, 512)]
    #[case(513, 1024)]
    #[case(3000, 4096)]
    fn append_grows_until_fit(#[case] length: usize, #[case] expected_capacity: usize) {
        let mut buffer = MessageBuffer::default();
        let text = "x".repeat(length);

        let written = append!(buffer, "{text}").unwrap();

        assert_eq!(written, length);
        assert_eq!(buffer.capacity(), expected_capacity);
        assert_eq!(buffer.as_str(), text);
    }

    #[test]
    fn append_carries_forward() {
        let mut buffer = MessageBuffer::default();
        let head = "h".repeat(200);
        let tail = "t".repeat(200);

        append!(buffer, "{head}").unwrap();
        assert_eq!(buffer.capacity(), 256);
        append!(buffer, "{tail}").unwrap();

        assert_eq!(buffer.capacity(), 512);
        assert_eq!(buffer.as_str(), format!("{head}{tail}"));
    }

    #[test]
    fn clear_retains_capacity() {
        let mut buffer = MessageBuffer::default();
        append!(buffer, "{}", "x".repeat(600)).unwrap();
        assert_eq!(buffer.capacity(), 1024);

        buffer.clear();

        assert_eq!(buffer.as_str(), "");
        assert_eq!(buffer.capacity(), 1024);

        append!(buffer, "short").unwrap();
        assert_eq!(buffer.as_str(), "short");
        assert_eq!(buffer.capacity(), 1024);
    }
}
