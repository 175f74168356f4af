use crate::api::{FlagArgument, ValueArgument};
use crate::parser::TextWidth;

/// A declared (or discovered) command line argument.
///
/// Both variants share the same capabilities: naming, aliasing, the "has been set" state, and help rendering.
///
/// ### Example
/// ```
/// # use dasharg_builder as dasharg;
/// use dasharg::{Argument, FlagArgument, ValueArgument};
///
/// let flag = Argument::from(FlagArgument::new("verbose"));
/// let value = Argument::from(ValueArgument::new("lang", "en:de").with_alias("language"));
///
/// assert!(flag.as_value().is_none());
/// assert!(value.matches("LANGUAGE"));
/// assert_eq!(value.as_value().unwrap().get_value().unwrap(), "en:de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A no-value argument.
    Flag(FlagArgument),
    /// A value-bearing argument.
    Value(ValueArgument),
}

impl Argument {
    fn base(&self) -> &FlagArgument {
        match self {
            Argument::Flag(flag) => flag,
            Argument::Value(value) => &value.base,
        }
    }

    fn base_mut(&mut self) -> &mut FlagArgument {
        match self {
            Argument::Flag(flag) => flag,
            Argument::Value(value) => &mut value.base,
        }
    }

    /// Document the help message for this argument.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.base_mut().set_description(description);
        self
    }

    /// Add a secondary name for this argument.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.base_mut().set_alias(alias);
        self
    }

    /// The primary name.
    pub fn name(&self) -> &str {
        self.base().name()
    }

    /// The secondary name, if any.
    pub fn alias(&self) -> Option<&str> {
        self.base().alias()
    }

    /// The help message.
    pub fn description(&self) -> &str {
        self.base().description()
    }

    /// Whether the command line (or the program) has set this argument.
    pub fn has_been_set(&self) -> bool {
        self.base().has_been_set()
    }

    /// Declare that this argument has been set.
    /// For a value argument, the value is left untouched.
    pub fn mark_set(&mut self) {
        self.base_mut().mark_set();
    }

    /// Whether `candidate` is the name or the alias, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        self.base().matches(candidate)
    }

    /// Whether `candidate` is the name, ignoring case.
    pub fn matches_name(&self, candidate: &str) -> bool {
        self.base().matches_name(candidate)
    }

    /// Whether `candidate` is the alias, ignoring case.
    pub fn matches_alias(&self, candidate: &str) -> bool {
        self.base().matches_alias(candidate)
    }

    /// View as a value argument.
    pub fn as_value(&self) -> Option<&ValueArgument> {
        match self {
            Argument::Flag(_) => None,
            Argument::Value(value) => Some(value),
        }
    }

    /// View as a mutable value argument.
    pub fn as_value_mut(&mut self) -> Option<&mut ValueArgument> {
        match self {
            Argument::Flag(_) => None,
            Argument::Value(value) => Some(value),
        }
    }

    /// Render the help block of this argument.
    pub fn render_help(&self) -> String {
        self.help_lines(None).join("\n")
    }

    pub(crate) fn help_lines(&self, width: Option<&TextWidth>) -> Vec<String> {
        match self {
            Argument::Flag(flag) => flag.help_lines(width),
            Argument::Value(value) => value.help_lines(width),
        }
    }
}

impl From<FlagArgument> for Argument {
    fn from(value: FlagArgument) -> Self {
        Argument::Flag(value)
    }
}

impl From<ValueArgument> for Argument {
    fn from(value: ValueArgument) -> Self {
        Argument::Value(value)
    }
}
