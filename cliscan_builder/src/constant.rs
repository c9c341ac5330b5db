pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_DESCRIPTION: &str = "Show this help message and exit.";
pub(crate) const TERMINATOR: &str = "--";
pub(crate) const COLUMN_MINIMUM: usize = 10;
pub(crate) const OPTION_COLUMN_MAXIMUM: usize = 30;
pub(crate) const NAME_COLUMN_MAXIMUM: usize = 28;
