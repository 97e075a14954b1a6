use crate::api::capture::*;
use crate::matcher::{ArgumentId, Descriptor};

/// An optional argument that takes no value (ex: `--verbose`).
/// Its value is whether it was specified on the Cli.
///
/// ### Example
/// ```
/// # use lilarg_builder as lilarg;
/// use lilarg::{ArgumentParser, FlagArg, ParseStatus};
///
/// let mut parser = ArgumentParser::new().unwrap();
/// let mark: FlagArg = parser.add("--mark").unwrap();
///
/// let args = ["program", "--mark"];
/// assert_eq!(parser.parse(&args).unwrap(), ParseStatus::Ok);
/// assert!(parser.value(mark));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagArg(ArgumentId);

impl<'a> Field<'a> for FlagArg {
    type Value = bool;

    fn bind(id: ArgumentId) -> Self {
        FlagArg(id)
    }

    fn id(&self) -> ArgumentId {
        self.0
    }

    fn initial() -> ArgumentValue<'a> {
        ArgumentValue::Flag
    }

    fn read(descriptor: &Descriptor<'a>) -> Self::Value {
        descriptor.is_filled()
    }
}

/// An argument that takes a base-10 integer value (default: `0`).
///
/// Conversion is permissive and never fails the parse: the scan stops at the first non-digit, so `"12abc"` is `12` and `"abc"` is `0`.
///
/// ### Example
/// ```
/// # use lilarg_builder as lilarg;
/// use lilarg::{ArgumentParser, IntArg, ParseStatus};
///
/// let mut parser = ArgumentParser::new().unwrap();
/// let first: IntArg = parser.add("--first").unwrap();
/// parser.set_default(first, 1);
///
/// let args = ["program"];
/// assert_eq!(parser.parse(&args).unwrap(), ParseStatus::Ok);
/// assert_eq!(parser.value(first), 1);
///
/// let args = ["program", "--first", "123"];
/// assert_eq!(parser.parse(&args).unwrap(), ParseStatus::Ok);
/// assert_eq!(parser.value(first), 123);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntArg(ArgumentId);

impl<'a> Field<'a> for IntArg {
    type Value = i64;

    fn bind(id: ArgumentId) -> Self {
        IntArg(id)
    }

    fn id(&self) -> ArgumentId {
        self.0
    }

    fn initial() -> ArgumentValue<'a> {
        ArgumentValue::Int {
            default: 0,
            value: 0,
        }
    }

    fn read(descriptor: &Descriptor<'a>) -> Self::Value {
        match descriptor.value() {
            ArgumentValue::Int { default, value } => {
                if descriptor.is_filled() {
                    *value
                } else {
                    *default
                }
            }
            _ => panic!("the IntArg handle does not belong to this parser"),
        }
    }
}

impl<'a> Defaultable<'a> for IntArg {
    fn write_default(value: &mut ArgumentValue<'a>, default: Self::Value) {
        match value {
            ArgumentValue::Int { default: d, .. } => *d = default,
            _ => panic!("the IntArg handle does not belong to this parser"),
        }
    }
}

/// An argument that takes a text value (default: `""`).
///
/// The value is borrowed from the Cli input, so it lives as long as the tokens given to [`ArgumentParser::parse`](./struct.ArgumentParser.html#method.parse).
///
/// ### Example
/// ```
/// # use lilarg_builder as lilarg;
/// use lilarg::{ArgumentParser, ParseStatus, StringArg};
///
/// let mut parser = ArgumentParser::new().unwrap();
/// let input: StringArg = parser.add("input").unwrap();
///
/// let args = ["program", "file.txt"];
/// assert_eq!(parser.parse(&args).unwrap(), ParseStatus::Ok);
/// assert_eq!(parser.value(input), "file.txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringArg(ArgumentId);

impl<'a> Field<'a> for StringArg {
    type Value = &'a str;

    fn bind(id: ArgumentId) -> Self {
        StringArg(id)
    }

    fn id(&self) -> ArgumentId {
        self.0
    }

    fn initial() -> ArgumentValue<'a> {
        ArgumentValue::Str {
            default: "",
            value: "",
        }
    }

    fn read(descriptor: &Descriptor<'a>) -> Self::Value {
        match descriptor.value() {
            ArgumentValue::Str { default, value } => {
                if descriptor.is_filled() {
                    *value
                } else {
                    *default
                }
            }
            _ => panic!("the StringArg handle does not belong to this parser"),
        }
    }
}

impl<'a> Defaultable<'a> for StringArg {
    fn write_default(value: &mut ArgumentValue<'a>, default: Self::Value) {
        match value {
            ArgumentValue::Str { default: d, .. } => *d = default,
            _ => panic!("the StringArg handle does not belong to this parser"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Registry;

    #[test]
    fn flag() {
        let mut registry = Registry::default();
        let flag = FlagArg::bind(registry.register("--mark", FlagArg::initial()).unwrap());

        assert!(!FlagArg::read(registry.get(flag.id())));
        registry.get_mut(flag.id()).matched();
        assert!(FlagArg::read(registry.get(flag.id())));
    }

    #[test]
    fn int_default() {
        let mut registry = Registry::default();
        let int = IntArg::bind(registry.register("--first", IntArg::initial()).unwrap());

        assert_eq!(IntArg::read(registry.get(int.id())), 0);
        IntArg::write_default(registry.get_mut(int.id()).value_mut(), 1);
        assert_eq!(IntArg::read(registry.get(int.id())), 1);
    }

    #[test]
    fn int_filled() {
        let mut registry = Registry::default();
        let int = IntArg::bind(registry.register("--first", IntArg::initial()).unwrap());
        IntArg::write_default(registry.get_mut(int.id()).value_mut(), 1);

        registry.get_mut(int.id()).bind("-7");

        assert_eq!(IntArg::read(registry.get(int.id())), -7);
    }

    #[test]
    fn string_default() {
        let mut registry = Registry::default();
        let string = StringArg::bind(registry.register("--second", StringArg::initial()).unwrap());

        assert_eq!(StringArg::read(registry.get(string.id())), "");
        StringArg::write_default(registry.get_mut(string.id()).value_mut(), "default");
        assert_eq!(StringArg::read(registry.get(string.id())), "default");
    }

    #[test]
    fn string_filled() {
        let mut registry = Registry::default();
        let string = StringArg::bind(registry.register("input", StringArg::initial()).unwrap());
        StringArg::write_default(registry.get_mut(string.id()).value_mut(), "default");

        registry.get_mut(string.id()).bind("abc");

        assert_eq!(StringArg::read(registry.get(string.id())), "abc");
    }

    #[test]
    #[should_panic]
    fn mismatched_handle() {
        let mut registry = Registry::default();
        let id = registry.register("--first", IntArg::initial()).unwrap();

        StringArg::read(registry.get(id));
    }
}
