/// The class of an argument, fixed by the keyword it is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Required, and bound by position on the Cli.
    Positional,
    /// Bound by its `--long` or `-s` keyword on the Cli.
    Optional,
}

/// The shape of a keyword, or of a Cli token.
///
/// Both registration keywords and parse tokens follow the same dash rule:
/// * `--NAME` is a long form.
/// * `-N` (a single dash followed by at least one character) is a short form.
/// * Anything else, including the lone `-`, is bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `--NAME`
    Long,
    /// `-N`
    Short,
    /// Neither; a positional name or a plain value.
    Bare,
}

impl Form {
    /// Classify a keyword or token by its leading dashes.
    ///
    /// ### Example
    /// ```
    /// # use lilarg_builder as lilarg;
    /// use lilarg::Form;
    ///
    /// assert_eq!(Form::of("--first"), Form::Long);
    /// assert_eq!(Form::of("-f"), Form::Short);
    /// assert_eq!(Form::of("-"), Form::Bare);
    /// assert_eq!(Form::of("input"), Form::Bare);
    /// ```
    pub fn of(keyword: &str) -> Self {
        if keyword.starts_with("--") {
            Form::Long
        } else if keyword.len() > 1 && keyword.starts_with('-') {
            Form::Short
        } else {
            Form::Bare
        }
    }

    /// The argument category a keyword of this form registers into.
    pub fn category(&self) -> Category {
        match self {
            Form::Long | Form::Short => Category::Optional,
            Form::Bare => Category::Positional,
        }
    }
}
