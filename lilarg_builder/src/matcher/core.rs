#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::matcher::{ArgumentId, Registry};
use crate::model::Form;
use crate::parser::ParseError;

/// What the parser should do once every token has been matched.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Complete,
    PrintHelp,
}

/// Matches Cli tokens onto the registry, one token at a time.
///
/// Precedence per token: pending option value > option keyword > positional argument > discard.
pub(crate) struct TokenMatcher<'r, 'a> {
    registry: &'r mut Registry<'a>,
    help: ArgumentId,
    // The optional argument awaiting its value token.
    pending: Option<usize>,
    // The next unfilled positional argument.
    cursor: usize,
}

impl<'r, 'a> TokenMatcher<'r, 'a> {
    pub(crate) fn new(registry: &'r mut Registry<'a>, help: ArgumentId) -> Self {
        registry.reset();
        Self {
            registry,
            help,
            pending: None,
            cursor: 0,
        }
    }

    /// Feed every token, then close.
    /// Stops at the first unrecognized option.
    pub(crate) fn consume(
        mut self,
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<Action, ParseError> {
        for token in tokens {
            self.feed(token)?;
        }

        self.close()
    }

    pub(crate) fn feed(&mut self, token: &'a str) -> Result<(), ParseError> {
        // The value of an option is taken unconditionally, even if it looks like an option itself.
        if let Some(index) = self.pending.take() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Binding '{token}' as the value of option #{index}.");
            }

            self.registry
                .optional_mut(index)
                .expect("internal error - pending option must exist")
                .bind(token);
            return Ok(());
        }

        match Form::of(token) {
            form @ (Form::Long | Form::Short) => self.match_option(form, token),
            Form::Bare => {
                self.match_argument(token);
                Ok(())
            }
        }
    }

    fn match_option(&mut self, form: Form, token: &'a str) -> Result<(), ParseError> {
        let index = self
            .registry
            .find_optional(form, token)
            .ok_or_else(|| ParseError::UnrecognizedArguments(token.to_string()))?;
        let descriptor = self
            .registry
            .optional_mut(index)
            .expect("internal error - found option must exist");

        if descriptor.takes_value() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Option '{token}' awaits its value.");
            }

            self.pending.replace(index);
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '{token}' matched.");
            }

            descriptor.matched();
        }

        Ok(())
    }

    fn match_argument(&mut self, token: &'a str) {
        match self.registry.positional_mut(self.cursor) {
            Some(descriptor) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Binding '{token}' to argument '{}'.", descriptor.name());
                }

                descriptor.bind(token);
                self.cursor += 1;
            }
            None => {
                // Surplus positional tokens are not an error.
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Discarding surplus token '{token}'.");
                }
            }
        }
    }

    /// Decide the outcome once all tokens are fed.
    /// Help takes precedence over missing arguments.
    pub(crate) fn close(self) -> Result<Action, ParseError> {
        #[cfg(feature = "tracing_debug")]
        {
            if let Some(index) = self.pending {
                debug!("Option #{index} never received its value; it remains unfilled.");
            }
        }

        if self.registry.get(self.help).is_filled() {
            return Ok(Action::PrintHelp);
        }

        let missing: Vec<String> = self.registry.positional()[self.cursor..]
            .iter()
            .map(|descriptor| descriptor.name().to_string())
            .collect();

        if missing.is_empty() {
            Ok(Action::Complete)
        } else {
            Err(ParseError::MissingArguments(missing))
        }
    }
}
