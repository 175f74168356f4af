use std::str::FromStr;
use thiserror::Error;

/// A required value argument was read before the command line (or the program) set it.
///
/// Carries the rendered help block of the argument, so the process boundary can show the user what is missing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Required argument '-{name}' has not been set.")]
pub struct MissingRequiredValue {
    name: String,
    help: String,
}

impl MissingRequiredValue {
    pub(crate) fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
        }
    }

    /// The name of the unset argument.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help block of the unset argument.
    pub fn help(&self) -> &str {
        &self.help
    }
}

/// Failure to read a value argument.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// No value argument is registered under the name or alias.
    #[error("Unknown argument '-{0}'.")]
    UnknownArgument(String),

    /// The argument is required, but has not been set.
    #[error(transparent)]
    MissingRequired(#[from] MissingRequiredValue),

    /// The stored value does not parse as the requested type.
    #[error("'{value}' cannot convert to {type_name}.")]
    InvalidFormat {
        /// The stored value.
        value: String,
        /// The requested type.
        type_name: &'static str,
    },
}

impl ValueError {
    fn invalid_format<T>(value: &str) -> Self {
        ValueError::InvalidFormat {
            value: value.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Read `true`/`false`, ignoring case.
/// Anything else (including `1` or `yes`) is an invalid format.
pub(crate) fn capture_bool(value: &str) -> Result<bool, ValueError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ValueError::invalid_format::<bool>(value))
    }
}

pub(crate) fn capture_int(value: &str) -> Result<i32, ValueError> {
    i32::from_str(value).map_err(|_| ValueError::invalid_format::<i32>(value))
}
