#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{Defaultable, Field, FlagArg};
use crate::constant::*;
use crate::matcher::{Action, Descriptor, Registry, TokenMatcher};
use crate::parser::{AllocationError, MessageBuffer, ParseStatus, Printer};

/// The command line parser.
///
/// Register every argument, parse once, then read the values back through the returned handles.
/// Arguments are registered by keyword:
/// * `--NAME` registers an optional argument by its long form.
/// * `-N` registers an optional argument by its short form.
/// * Anything else registers a (required) positional argument, shown by that name.
///
/// The `-h, --help` flag is always registered, and always first among the optional arguments.
///
/// ### Example
/// ```
/// # use lilarg_builder as lilarg;
/// use lilarg::{ArgumentParser, IntArg, ParseStatus, StringArg};
///
/// let mut parser = ArgumentParser::new().unwrap();
/// let input: StringArg = parser.add("input").unwrap();
/// let first: IntArg = parser.add("--first").unwrap();
/// parser.set_alt(first, "-f");
///
/// let args = ["program", "-f", "123", "file.txt"];
/// assert_eq!(parser.parse(&args).unwrap(), ParseStatus::Ok);
/// assert_eq!(parser.value(input), "file.txt");
/// assert_eq!(parser.value(first), 123);
/// ```
#[derive(Debug)]
pub struct ArgumentParser<'a> {
    registry: Registry<'a>,
    buffer: MessageBuffer,
    program: &'a str,
    help: FlagArg,
}

impl<'a> ArgumentParser<'a> {
    /// Create a command line parser, with only the help flag registered.
    pub fn new() -> Result<Self, AllocationError> {
        let mut registry = Registry::default();
        let help = FlagArg::bind(registry.register(HELP_NAME, FlagArg::initial())?);
        registry.set_alt(help.id(), HELP_SHORT);
        registry.set_help(help.id(), HELP_MESSAGE);

        Ok(Self {
            registry,
            buffer: MessageBuffer::default(),
            program: "",
            help,
        })
    }

    /// Register an argument, typed by the handle `F`.
    ///
    /// The order of positional arguments corresponds to their positional order during parsing.
    /// The order of optional arguments only affects the usage and help messages.
    ///
    /// Registering a keyword that is already registered breaks the contract of this method (checked by debug assertions only).
    /// The returned handle is only valid on this parser; using it on another parser may panic.
    ///
    /// ### Example
    /// ```
    /// # use lilarg_builder as lilarg;
    /// use lilarg::{ArgumentParser, FlagArg, IntArg, StringArg};
    ///
    /// let mut parser = ArgumentParser::new().unwrap();
    /// let _input: StringArg = parser.add("input").unwrap();
    /// let _count: IntArg = parser.add("--count").unwrap();
    /// let _verbose: FlagArg = parser.add("-v").unwrap();
    /// ```
    pub fn add<F: Field<'a>>(&mut self, keyword: &'a str) -> Result<F, AllocationError> {
        let id = self.registry.register(keyword, F::initial())?;
        Ok(F::bind(id))
    }

    /// Give an optional argument its other keyword form.
    ///
    /// A `--NAME` keyword sets the long form, and a `-N` keyword sets the short form.
    /// Only the missing form may be set; replacing a form, colliding with a registered keyword, or targeting a positional argument breaks the contract of this method (checked by debug assertions only).
    ///
    /// ### Example
    /// ```
    /// # use lilarg_builder as lilarg;
    /// use lilarg::{ArgumentParser, IntArg};
    ///
    /// let mut parser = ArgumentParser::new().unwrap();
    /// let first: IntArg = parser.add("--first").unwrap();
    /// parser.set_alt(first, "-f");
    ///
    /// let args = ["program"];
    /// parser.parse(&args).unwrap();
    /// assert_eq!(parser.format_usage().unwrap(), "usage: program [-h] [-f FIRST]\n");
    /// ```
    pub fn set_alt<F: Field<'a>>(&mut self, field: F, keyword: &'a str) {
        self.registry.set_alt(field.id(), keyword);
    }

    /// Document the help message for an argument.
    /// If repeated, only the final help message will apply.
    pub fn set_help<F: Field<'a>>(&mut self, field: F, help: &'a str) {
        self.registry.set_help(field.id(), help);
    }

    /// Set the value reported for an argument that was not filled by the parse.
    pub fn set_default<F: Defaultable<'a>>(&mut self, field: F, default: F::Value) {
        F::write_default(self.registry.get_mut(field.id()).value_mut(), default);
    }

    /// Read the value of an argument: the parsed value when filled, otherwise its default.
    pub fn value<F: Field<'a>>(&self, field: F) -> F::Value {
        F::read(self.registry.get(field.id()))
    }

    /// Whether an argument was matched during the most recent parse.
    pub fn is_filled<F: Field<'a>>(&self, field: F) -> bool {
        self.registry.get(field.id()).is_filled()
    }

    /// The handle of the built-in `-h, --help` flag.
    pub fn help(&self) -> FlagArg {
        self.help
    }

    /// Run the parser against the Cli input, where `args[0]` is the program name.
    ///
    /// Any fill state from a previous parse is forgotten first.
    /// Tokens are then matched in order:
    /// 1. A token directly following a value-taking option is that option's value (even if it starts with `-`).
    /// 2. A `--NAME` or `-N` token must match a registered keyword, otherwise parsing stops with [`ParseError::UnrecognizedArguments`](./enum.ParseError.html).
    /// 3. Any other token (including a lone `-`) fills the next positional argument; surplus tokens are discarded.
    ///
    /// The help flag produces [`ParseStatus::Help`], even when positional arguments are missing.
    /// Otherwise, missing positional arguments produce [`ParseError::MissingArguments`](./enum.ParseError.html).
    /// In both the `Help` and `Error` cases, the rendered text is available via [`ArgumentParser::message`].
    ///
    /// ### Example
    /// ```
    /// # use lilarg_builder as lilarg;
    /// use lilarg::{ArgumentParser, ParseError, ParseStatus, StringArg};
    ///
    /// let mut parser = ArgumentParser::new().unwrap();
    /// let _input: StringArg = parser.add("input").unwrap();
    ///
    /// let args = ["program"];
    /// assert_eq!(
    ///     parser.parse(&args).unwrap(),
    ///     ParseStatus::Error(ParseError::MissingArguments(vec!["input".to_string()]))
    /// );
    /// assert_eq!(
    ///     parser.message(),
    ///     "usage: program [-h] input\nprogram: error: the following arguments are required: input\n"
    /// );
    /// ```
    pub fn parse<S: AsRef<str>>(&mut self, args: &'a [S]) -> Result<ParseStatus, AllocationError> {
        let (program, tokens) = match args.split_first() {
            Some((program, tokens)) => (program.as_ref(), tokens),
            None => ("", args),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing {} tokens for program '{program}'.", tokens.len());
        }

        self.program = program;
        self.buffer.clear();
        let action = TokenMatcher::new(&mut self.registry, self.help.id())
            .consume(tokens.iter().map(|token| token.as_ref()));
        let printer = Printer::new(self.program, &self.registry);

        let status = match action {
            Ok(Action::Complete) => ParseStatus::Ok,
            Ok(Action::PrintHelp) => {
                printer.print_help(&mut self.buffer)?;
                ParseStatus::Help
            }
            Err(error) => {
                printer.print_error(&error, &mut self.buffer)?;
                ParseStatus::Error(error)
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parse outcome: {status}.");
        }

        Ok(status)
    }

    /// The message rendered by the most recent parse (or `format_*` call).
    /// Empty after a successful parse.
    pub fn message(&self) -> &str {
        self.buffer.as_str()
    }

    /// Render the usage line, for the program name of the most recent parse.
    /// Before any parse the program name is empty, so the line reads `usage:  [-h]`.
    pub fn format_usage(&mut self) -> Result<&str, AllocationError> {
        Printer::new(self.program, &self.registry).print_usage(&mut self.buffer)?;
        Ok(self.buffer.as_str())
    }

    /// Render the full help message, for the program name of the most recent parse.
    pub fn format_help(&mut self) -> Result<&str, AllocationError> {
        Printer::new(self.program, &self.registry).print_help(&mut self.buffer)?;
        Ok(self.buffer.as_str())
    }

    /// The program name (`args[0]`) of the most recent parse.
    pub fn program(&self) -> &'a str {
        self.program
    }

    /// The positional arguments, in registration order.
    pub fn positionals(&self) -> impl Iterator<Item = &Descriptor<'a>> {
        self.registry.positional().iter()
    }

    /// The optional arguments, in registration order (starting with the help flag).
    pub fn optionals(&self) -> impl Iterator<Item = &Descriptor<'a>> {
        self.registry.optional().iter()
    }
}
