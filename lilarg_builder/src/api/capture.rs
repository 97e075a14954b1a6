use crate::matcher::{ArgumentId, Descriptor};

/// The typed payload of an argument: its current value and default.
///
/// A `Flag` has no payload; its value is simply whether it was matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue<'a> {
    /// A no-value optional argument.
    Flag,
    /// A base-10 integer argument.
    Int {
        /// Reported when the argument is not filled.
        default: i64,
        /// The most recently assigned value.
        value: i64,
    },
    /// A text argument, borrowed from the Cli input.
    Str {
        /// Reported when the argument is not filled.
        default: &'a str,
        /// The most recently assigned value.
        value: &'a str,
    },
}

impl<'a> ArgumentValue<'a> {
    /// Whether a token must be consumed to fill this argument.
    pub fn takes_value(&self) -> bool {
        !matches!(self, ArgumentValue::Flag)
    }

    pub(crate) fn assign(&mut self, token: &'a str) {
        match self {
            ArgumentValue::Flag => {
                unreachable!("internal error - must not assign onto a Flag");
            }
            ArgumentValue::Int { value, .. } => *value = parse_int(token),
            ArgumentValue::Str { value, .. } => *value = token,
        }
    }
}

/// Behaviour of a typed argument handle, used at the top of the parser object graph to keep each argument's type.
///
/// Implemented by [`FlagArg`](./struct.FlagArg.html), [`IntArg`](./struct.IntArg.html), and [`StringArg`](./struct.StringArg.html).
pub trait Field<'a>: Copy {
    /// The type read back via [`ArgumentParser::value`](./struct.ArgumentParser.html#method.value).
    type Value;

    #[doc(hidden)]
    fn bind(id: ArgumentId) -> Self;

    #[doc(hidden)]
    fn id(&self) -> ArgumentId;

    #[doc(hidden)]
    fn initial() -> ArgumentValue<'a>;

    #[doc(hidden)]
    fn read(descriptor: &Descriptor<'a>) -> Self::Value;
}

/// Behaviour of a typed argument handle which carries a default value.
pub trait Defaultable<'a>: Field<'a> {
    #[doc(hidden)]
    fn write_default(value: &mut ArgumentValue<'a>, default: Self::Value);
}

/// Permissive base-10 conversion: leading ASCII whitespace and a sign are accepted, and the scan stops at the first non-digit.
/// No digits yields `0`; out of range values saturate.
pub(crate) fn parse_int(token: &str) -> i64 {
    // ASCII whitespace, vertical tab included.
    let trimmed = token.trim_start_matches([' ', '\t', '\n', '\x0B', '\x0C', '\r']);
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut value: i64 = 0;

    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        // Accumulate negatives downwards so that `i64::MIN` is reachable.
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}
