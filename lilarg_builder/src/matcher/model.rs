use crate::api::ArgumentValue;
use crate::model::{Category, Form};
use crate::parser::AllocationError;

/// Identifies a registered argument: the sequence it belongs to, and its position within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentId {
    category: Category,
    index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Keywords<'a> {
    Positional(&'a str),
    Optional {
        long: Option<&'a str>,
        short: Option<&'a str>,
    },
}

/// A read-only view of one registered argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor<'a> {
    keywords: Keywords<'a>,
    help: Option<&'a str>,
    filled: bool,
    value: ArgumentValue<'a>,
}

impl<'a> Descriptor<'a> {
    fn new(keywords: Keywords<'a>, value: ArgumentValue<'a>) -> Self {
        Self {
            keywords,
            help: None,
            filled: false,
            value,
        }
    }

    /// The display name: the positional name, otherwise the long form, otherwise the short form.
    pub fn name(&self) -> &'a str {
        match &self.keywords {
            Keywords::Positional(name) => *name,
            Keywords::Optional { long, short } => (*long)
                .or(*short)
                .expect("internal error - an optional argument must have a long or short form"),
        }
    }

    /// The `--long` form, if any.
    pub fn long(&self) -> Option<&'a str> {
        match &self.keywords {
            Keywords::Positional(_) => None,
            Keywords::Optional { long, .. } => *long,
        }
    }

    /// The `-s` short form, if any.
    pub fn short(&self) -> Option<&'a str> {
        match &self.keywords {
            Keywords::Positional(_) => None,
            Keywords::Optional { short, .. } => *short,
        }
    }

    /// The help message, if any.
    pub fn help(&self) -> Option<&'a str> {
        self.help
    }

    /// Whether the argument was matched during the most recent parse.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Whether the argument consumes a value token.
    pub fn takes_value(&self) -> bool {
        self.value.takes_value()
    }

    /// The typed value and default of the argument.
    pub fn value(&self) -> &ArgumentValue<'a> {
        &self.value
    }

    /// The sequence this argument was registered into.
    pub fn category(&self) -> Category {
        match &self.keywords {
            Keywords::Positional(_) => Category::Positional,
            Keywords::Optional { .. } => Category::Optional,
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut ArgumentValue<'a> {
        &mut self.value
    }

    /// Declare that the argument has been matched, without a value.
    pub(crate) fn matched(&mut self) {
        self.filled = true;
    }

    /// Fill the argument from a value token.
    pub(crate) fn bind(&mut self, token: &'a str) {
        if self.value.takes_value() {
            self.value.assign(token);
        }

        self.filled = true;
    }

    fn owns(&self, keyword: &str) -> bool {
        self.long() == Some(keyword) || self.short() == Some(keyword)
    }
}

/// The declared arguments, kept in two insertion-ordered sequences.
#[derive(Debug, Default)]
pub(crate) struct Registry<'a> {
    positional: Vec<Descriptor<'a>>,
    optional: Vec<Descriptor<'a>>,
}

impl<'a> Registry<'a> {
    /// Register an argument into the sequence selected by `keyword`'s leading dashes.
    pub(crate) fn register(
        &mut self,
        keyword: &'a str,
        value: ArgumentValue<'a>,
    ) -> Result<ArgumentId, AllocationError> {
        let form = Form::of(keyword);
        debug_assert!(
            !self.is_registered(keyword),
            "the keyword '{keyword}' is already registered"
        );
        debug_assert!(
            form != Form::Bare || value.takes_value(),
            "the positional argument '{keyword}' must take a value"
        );

        let category = form.category();
        let keywords = match form {
            Form::Long => Keywords::Optional {
                long: Some(keyword),
                short: None,
            },
            Form::Short => Keywords::Optional {
                long: None,
                short: Some(keyword),
            },
            Form::Bare => Keywords::Positional(keyword),
        };
        let sequence = match category {
            Category::Positional => &mut self.positional,
            Category::Optional => &mut self.optional,
        };
        sequence
            .try_reserve(1)
            .map_err(|source| AllocationError::Registry {
                keyword: keyword.to_string(),
                source,
            })?;
        sequence.push(Descriptor::new(keywords, value));

        Ok(ArgumentId {
            category,
            index: sequence.len() - 1,
        })
    }

    /// Fill the missing long/short slot of an optional argument.
    ///
    /// Filling an occupied slot, colliding with a registered keyword, or targeting a positional argument all break the caller contract.
    pub(crate) fn set_alt(&mut self, id: ArgumentId, keyword: &'a str) {
        let form = Form::of(keyword);
        debug_assert!(
            !self.is_registered(keyword),
            "the keyword '{keyword}' is already registered"
        );
        debug_assert!(
            form != Form::Bare,
            "the alternate keyword '{keyword}' must start with '-'"
        );
        let descriptor = self.get_mut(id);
        debug_assert!(
            descriptor.category() == Category::Optional,
            "cannot set the alternate keyword '{keyword}' on the positional argument '{}'",
            descriptor.name()
        );

        if let Keywords::Optional { long, short } = &mut descriptor.keywords {
            let slot = match form {
                Form::Short => short,
                Form::Long | Form::Bare => long,
            };
            debug_assert!(
                slot.is_none(),
                "the alternate keyword '{keyword}' would replace '{}'",
                (*slot).unwrap_or_default()
            );
            slot.replace(keyword);
        }
    }

    pub(crate) fn set_help(&mut self, id: ArgumentId, help: &'a str) {
        self.get_mut(id).help.replace(help);
    }

    pub(crate) fn get(&self, id: ArgumentId) -> &Descriptor<'a> {
        match id.category {
            Category::Positional => &self.positional[id.index],
            Category::Optional => &self.optional[id.index],
        }
    }

    pub(crate) fn get_mut(&mut self, id: ArgumentId) -> &mut Descriptor<'a> {
        match id.category {
            Category::Positional => &mut self.positional[id.index],
            Category::Optional => &mut self.optional[id.index],
        }
    }

    pub(crate) fn positional(&self) -> &[Descriptor<'a>] {
        &self.positional
    }

    pub(crate) fn optional(&self) -> &[Descriptor<'a>] {
        &self.optional
    }

    pub(crate) fn positional_mut(&mut self, index: usize) -> Option<&mut Descriptor<'a>> {
        self.positional.get_mut(index)
    }

    pub(crate) fn optional_mut(&mut self, index: usize) -> Option<&mut Descriptor<'a>> {
        self.optional.get_mut(index)
    }

    /// Find the optional argument whose `form` keyword is exactly `token`.
    pub(crate) fn find_optional(&self, form: Form, token: &str) -> Option<usize> {
        self.optional.iter().position(|descriptor| match form {
            Form::Long => descriptor.long() == Some(token),
            Form::Short => descriptor.short() == Some(token),
            Form::Bare => false,
        })
    }

    /// Forget all fill state from a previous parse.
    pub(crate) fn reset(&mut self) {
        for descriptor in self
            .positional
            .iter_mut()
            .chain(self.optional.iter_mut())
        {
            descriptor.filled = false;
        }
    }

    fn is_registered(&self, keyword: &str) -> bool {
        self.optional.iter().any(|descriptor| descriptor.owns(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn int() -> ArgumentValue<'static> {
        ArgumentValue::Int {
            default: 0,
            value: 0,
        }
    }

    #[rstest]
    #[case("--first", Category::Optional, Some("--first"), None)]
    #[case("-f", Category::Optional, None, Some("-f"))]
    #[case("first", Category::Positional, None, None)]
    #[case("-", Category::Positional, None, None)]
    fn register(
        #[case] keyword: &'static str,
        #[case] category: Category,
        #[case] long: Option<&str>,
        #[case] short: Option<&str>,
    ) {
        let mut registry = Registry::default();

        let id = registry.register(keyword, int()).unwrap();

        let descriptor = registry.get(id);
        assert_eq!(descriptor.category(), category);
        assert_eq!(descriptor.name(), keyword);
        assert_eq!(descriptor.long(), long);
        assert_eq!(descriptor.short(), short);
        assert_eq!(descriptor.help(), None);
        assert!(!descriptor.is_filled());
        assert!(descriptor.takes_value());
    }

    #[test]
    fn register_preserves_order() {
        let mut registry = Registry::default();

        registry.register("input", int()).unwrap();
        registry.register("--first", int()).unwrap();
        registry.register("output", int()).unwrap();
        registry.register("-s", ArgumentValue::Flag).unwrap();

        let positional: Vec<&str> = registry.positional().iter().map(Descriptor::name).collect();
        let optional: Vec<&str> = registry.optional().iter().map(Descriptor::name).collect();
        assert_eq!(positional, vec!["input", "output"]);
        assert_eq!(optional, vec!["--first", "-s"]);
    }

    #[rstest]
    #[case("--first", "-f")]
    #[case("-f", "--first")]
    fn set_alt(#[case] keyword: &'static str, #[case] alt: &'static str) {
        let mut registry = Registry::default();
        let id = registry.register(keyword, int()).unwrap();

        registry.set_alt(id, alt);

        let descriptor = registry.get(id);
        assert_eq!(descriptor.long(), Some("--first"));
        assert_eq!(descriptor.short(), Some("-f"));
        assert_eq!(descriptor.name(), "--first");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn set_alt_occupied() {
        let mut registry = Registry::default();
        let id = registry.register("--first", int()).unwrap();

        registry.set_alt(id, "--other");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn set_alt_positional() {
        let mut registry = Registry::default();
        let id = registry.register("input", int()).unwrap();

        registry.set_alt(id, "-i");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn register_duplicate() {
        let mut registry = Registry::default();
        let id = registry.register("--first", int()).unwrap();
        registry.set_alt(id, "-f");

        registry.register("-f", ArgumentValue::Flag).unwrap();
    }

    #[test]
    fn set_help() {
        let mut registry = Registry::default();
        let id = registry.register("input", int()).unwrap();

        registry.set_help(id, "input file");

        assert_eq!(registry.get(id).help(), Some("input file"));
    }

    #[rstest]
    #[case(Form::Long, "--first", Some(1))]
    #[case(Form::Short, "-f", Some(1))]
    #[case(Form::Long, "--mark", Some(0))]
    #[case(Form::Short, "-m", None)]
    #[case(Form::Long, "-f", None)]
    #[case(Form::Short, "--first", None)]
    #[case(Form::Bare, "first", None)]
    fn find_optional(#[case] form: Form, #[case] token: &str, #[case] expected: Option<usize>) {
        let mut registry = Registry::default();
        registry.register("--mark", ArgumentValue::Flag).unwrap();
        let id = registry.register("--first", int()).unwrap();
        registry.set_alt(id, "-f");

        assert_eq!(registry.find_optional(form, token), expected);
    }

    #[test]
    fn bind_and_reset() {
        let mut registry = Registry::default();
        let input = registry.register("input", int()).unwrap();
        let mark = registry.register("--mark", ArgumentValue::Flag).unwrap();

        registry.get_mut(input).bind("12");
        registry.get_mut(mark).matched();
        assert!(registry.get(input).is_filled());
        assert!(registry.get(mark).is_filled());
        assert_eq!(
            registry.get(input).value(),
            &ArgumentValue::Int {
                default: 0,
                value: 12
            }
        );

        registry.reset();
        assert!(!registry.get(input).is_filled());
        assert!(!registry.get(mark).is_filled());
    }

    #[test]
    fn bind_flag() {
        let mut registry = Registry::default();
        let mark = registry.register("--mark", ArgumentValue::Flag).unwrap();

        registry.get_mut(mark).bind("ignored");

        assert!(registry.get(mark).is_filled());
        assert_eq!(registry.get(mark).value(), &ArgumentValue::Flag);
    }
}
