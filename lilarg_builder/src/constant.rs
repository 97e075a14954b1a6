pub(crate) const HELP_NAME: &str = "--help";
pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_MESSAGE: &str = "show this help message and exit";

// The message buffer starts at this capacity on first use, and doubles from there.
pub(crate) const INITIAL_BUFFER_SIZE: usize = 256;

// Help entries are indented by `PADDING`, and their help text starts at `FIRST_COLUMN_SIZE`.
pub(crate) const PADDING: usize = 2;
pub(crate) const FIRST_COLUMN_SIZE: usize = 24;
