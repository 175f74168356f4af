use std::env;

use crate::api::{ArgumentParser, MissingRequiredValue, ValueError};
use crate::model::Outcome;
use crate::parser::interface::{ConsoleInterface, UserInterface};

impl ArgumentParser {
    /// Run the command line parser against the input tokens (see [`ArgumentParser::parse_tokens`]).
    ///
    /// If the help switch is encountered and the parser exits on help, the help message is displayed and the process exits with error code `0` (via [`std::process::exit`]).
    pub fn parse(&mut self, tokens: &[&str]) -> Outcome {
        let outcome = self.parse_tokens(tokens);

        if outcome == Outcome::Help && self.exits_on_help() {
            std::process::exit(0);
        }

        outcome
    }

    /// Run the command line parser against the Cli [`env::args`] (see [`ArgumentParser::parse`]).
    pub fn parse_env(&mut self) -> Outcome {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }
}

/// Unwrap the value, or report the failure and exit with error code `1` (via [`std::process::exit`]).
///
/// A required value that has not been set is reported with the help message of its argument.
///
/// ### Example
/// ```
/// # use dasharg_builder as dasharg;
/// use dasharg::{ArgumentParser, OrExit, ValueArgument};
///
/// let mut parser = ArgumentParser::new("translator")
///     .add(ValueArgument::new("translator", "deepl"));
///
/// parser.parse(&["-translator", "google"]);
///
/// let translator: String = parser.get_string("translator").or_exit();
/// assert_eq!(translator, "google");
/// ```
pub trait OrExit<T> {
    /// Unwrap the value, or report the failure and exit with error code `1`.
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T, ValueError> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => std::process::exit(report(error, &ConsoleInterface::default())),
        }
    }
}

impl<T> OrExit<T> for Result<T, MissingRequiredValue> {
    fn or_exit(self) -> T {
        self.map_err(ValueError::from).or_exit()
    }
}

/// Display the failure, producing the exit code.
fn report(error: ValueError, user_interface: &(impl UserInterface + ?Sized)) -> i32 {
    match error {
        ValueError::MissingRequired(missing) => {
            user_interface.print(missing.help().to_string());
        }
        other => {
            user_interface.print_error(other.to_string());
        }
    }

    1
}
