use std::path::PathBuf;

use crate::api::capture::*;
use crate::constant::*;
use crate::parser::TextWidth;
use crate::prelude::IntoValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

/// An argument that carries no value, only whether it has been set.
///
/// ### Example
/// ```
/// # use dasharg_builder as dasharg;
/// use dasharg::FlagArgument;
///
/// let mut verbose = FlagArgument::new("verbose")
///     .describe("Print every step.")
///     .with_alias("v");
/// assert!(!verbose.has_been_set());
///
/// verbose.mark_set();
/// assert!(verbose.has_been_set());
/// assert!(verbose.matches("V"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagArgument {
    name: String,
    alias: Option<String>,
    description: String,
    set: bool,
}

impl FlagArgument {
    /// Create a flag argument, matched on the command line via `-name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            description: String::default(),
            set: false,
        }
    }

    /// Document the help message for this argument.
    /// If repeated, only the final message will apply.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Add a secondary name for this argument.
    /// If repeated, only the final alias will apply.
    ///
    /// Aliases are only consulted after every argument's primary name fails to match.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.set_alias(alias);
        self
    }

    /// The primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The secondary name, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The help message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the help message in place.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the alias in place.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias.replace(alias.into());
    }

    /// Whether the command line (or the program) has set this argument.
    pub fn has_been_set(&self) -> bool {
        self.set
    }

    /// Declare that this argument has been set.
    pub fn mark_set(&mut self) {
        self.set = true;
    }

    /// Whether `candidate` is the name or the alias, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        self.matches_name(candidate) || self.matches_alias(candidate)
    }

    /// Whether `candidate` is the name, ignoring case.
    pub fn matches_name(&self, candidate: &str) -> bool {
        eq_ignore_case(&self.name, candidate)
    }

    /// Whether `candidate` is the alias, ignoring case.
    pub fn matches_alias(&self, candidate: &str) -> bool {
        match &self.alias {
            Some(alias) => eq_ignore_case(alias, candidate),
            None => false,
        }
    }

    /// Render the help block of this argument.
    pub fn render_help(&self) -> String {
        self.help_lines(None).join("\n")
    }

    pub(crate) fn help_lines(&self, width: Option<&TextWidth>) -> Vec<String> {
        let mut lines = vec![
            OPTIONAL_MESSAGE.to_string(),
            format!("{ARGUMENT_PREFIX}{}", self.name),
        ];
        lines.extend(self.description_lines(width));
        lines
    }

    fn description_lines(&self, width: Option<&TextWidth>) -> Vec<String> {
        let lines = match width {
            Some(width) => width.wrap(&self.description),
            None => vec![self.description.clone()],
        };

        if lines.is_empty() {
            vec![String::default()]
        } else {
            lines
        }
    }
}

/// An argument that carries a value, stored as a string and converted on read.
///
/// The default is stored at construction, but does not count as having been set.
///
/// ### Example
/// ```
/// # use dasharg_builder as dasharg;
/// use dasharg::ValueArgument;
///
/// let mut lang = ValueArgument::new("lang", "en:de")
///     .describe("The language pair to translate.")
///     .with_alias("language");
/// assert_eq!(lang.get_value().unwrap(), "en:de");
/// assert!(!lang.has_been_set());
///
/// lang.set_value("fr:de");
/// assert_eq!(lang.get_string().unwrap(), "fr:de");
/// assert!(lang.has_been_set());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueArgument {
    pub(crate) base: FlagArgument,
    value: String,
    required: bool,
}

impl ValueArgument {
    /// Create a value argument, matched on the command line via `-name VALUE`.
    ///
    /// The `default` is stringified immediately (paths in their absolute form).
    pub fn new(name: impl Into<String>, default: impl IntoValue) -> Self {
        Self {
            base: FlagArgument::new(name),
            value: default.into_value(),
            required: false,
        }
    }

    /// Document the help message for this argument.
    /// If repeated, only the final message will apply.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.base.set_description(description);
        self
    }

    /// Add a secondary name for this argument.
    /// If repeated, only the final alias will apply.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.base.set_alias(alias);
        self
    }

    /// Require this argument to be set before its value is read.
    ///
    /// ### Example
    /// ```
    /// # use dasharg_builder as dasharg;
    /// use dasharg::ValueArgument;
    ///
    /// let driver = ValueArgument::new("driverpath", "geckodriver").required();
    /// let error = driver.get_value().unwrap_err();
    /// assert_eq!(error.name(), "driverpath");
    /// ```
    pub fn required(mut self) -> Self {
        self.set_required(true);
        self
    }

    /// Change whether this argument is required in place.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Whether this argument is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether this argument is optional.
    pub fn is_optional(&self) -> bool {
        !self.required
    }

    /// The primary name.
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// The secondary name, if any.
    pub fn alias(&self) -> Option<&str> {
        self.base.alias()
    }

    /// The help message.
    pub fn description(&self) -> &str {
        self.base.description()
    }

    /// Whether the command line (or the program) has set this argument.
    pub fn has_been_set(&self) -> bool {
        self.base.has_been_set()
    }

    /// Declare that this argument has been set, leaving its value untouched.
    pub fn mark_set(&mut self) {
        self.base.mark_set();
    }

    /// Assign the value (stringified, paths in their absolute form) and declare the argument set.
    pub fn set_value(&mut self, value: impl IntoValue) {
        self.value = value.into_value();
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Argument '{}' assigned value '{}'.", self.name(), self.value);
        }
        self.base.mark_set();
    }

    /// Read the value: the parsed one when set, the default otherwise.
    ///
    /// A required argument that has not been set cannot be read.
    pub fn get_value(&self) -> Result<&str, MissingRequiredValue> {
        if self.required && !self.has_been_set() {
            return Err(MissingRequiredValue::new(
                self.name(),
                self.render_help(),
            ));
        }

        Ok(&self.value)
    }

    /// Read the value as a `String`.
    pub fn get_string(&self) -> Result<String, ValueError> {
        Ok(self.get_value()?.to_string())
    }

    /// Read the value as a `bool`; only `true` and `false` (in any case) convert.
    pub fn get_bool(&self) -> Result<bool, ValueError> {
        capture_bool(self.get_value()?)
    }

    /// Read the value as an `i32`.
    pub fn get_int(&self) -> Result<i32, ValueError> {
        capture_int(self.get_value()?)
    }

    /// Read the value as a path (the path needn't exist).
    pub fn get_path(&self) -> Result<PathBuf, ValueError> {
        Ok(PathBuf::from(self.get_value()?))
    }

    /// Render the help block of this argument, including an example with the current value.
    pub fn render_help(&self) -> String {
        self.help_lines(None).join("\n")
    }

    pub(crate) fn help_lines(&self, width: Option<&TextWidth>) -> Vec<String> {
        let requirement = if self.required {
            REQUIRED_MESSAGE
        } else {
            OPTIONAL_MESSAGE
        };
        let mut lines = vec![
            requirement.to_string(),
            format!("{ARGUMENT_PREFIX}{} {VALUE_PLACEHOLDER}", self.name()),
        ];
        lines.extend(self.base.description_lines(width));
        lines.push(format!(
            "Example: {ARGUMENT_PREFIX}{} {}",
            self.name(),
            self.value
        ));
        lines
    }
}
