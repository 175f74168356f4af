pub(crate) const ARGUMENT_PREFIX: char = '-';
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Displays this help message.";
pub(crate) const VALUE_PLACEHOLDER: &str = "<Value>";
pub(crate) const REQUIRED_MESSAGE: &str = "This Argument is required.";
pub(crate) const OPTIONAL_MESSAGE: &str = "This Argument is optional.";
pub(crate) const OPTIONS_HEADER: &str = "Options:";
