/// The default key under which the help switch stores its value.
pub(crate) const HELP_KEY: &str = "ShowHelp";
pub(crate) const HELP_NAME: &str = "--help";
pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

/// Name of the root node created by `OptionParser::parse`.
pub(crate) const ROOT_NAME: &str = "CommandLine";
pub(crate) const DEFAULT_SLOT_NAME: &str = "value";
pub(crate) const DEFAULT_DELIMITER: char = ',';

// Help layout.
pub(crate) const DISPLAY_COLUMNS: usize = 80;
pub(crate) const TAB_STOP: usize = 2;
pub(crate) const DESCRIPTION_MIN_COLUMNS: usize = 44;
pub(crate) const USAGE_PREFIX: &str = "Usage: ";
