use std::path::{Path, PathBuf};

use crate::api::{Argument, ValueArgument, ValueError};
use crate::matcher::{is_help, match_tokens};
use crate::model::Outcome;
use crate::parser::{Arguments, ConsoleInterface, Printer, UserInterface};
use crate::prelude::IntoValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser.
///
/// Arguments are matched by `-name` (or `-alias`), ignoring case.
/// A `-name` followed by a token not starting with `-` sets a value; otherwise it sets a flag.
///
/// ### Example
/// ```
/// # use dasharg_builder as dasharg;
/// use dasharg::{ArgumentParser, FlagArgument, Outcome, ValueArgument};
///
/// let mut parser = ArgumentParser::new("translator")
///     .add(ValueArgument::new("lang", "en:de").with_alias("language"))
///     .add(FlagArgument::new("verbose"));
///
/// let outcome = parser.parse_tokens(&["-LANGUAGE", "fr:de", "-verbose"]);
///
/// assert_eq!(outcome, Outcome::Parsed);
/// assert_eq!(parser.get_string("lang").unwrap(), "fr:de");
/// assert!(parser.is_set("verbose"));
/// ```
pub struct ArgumentParser {
    program: String,
    arguments: Arguments,
    exit_on_help: bool,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ArgumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("program", &self.program)
            .field("arguments", &self.arguments)
            .field("exit_on_help", &self.exit_on_help)
            .finish()
    }
}

impl ArgumentParser {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use dasharg_builder as dasharg;
    /// use dasharg::ArgumentParser;
    ///
    /// let mut parser = ArgumentParser::new("program");
    ///
    /// parser.parse_tokens(&[]);
    /// assert!(parser.arguments().is_empty());
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_interface(program, Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(
        program: impl Into<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            arguments: Arguments::default(),
            exit_on_help: true,
            printer: Printer::terminal(),
            user_interface,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_printer(mut self, printer: Printer) -> Self {
        self.printer = printer;
        self
    }

    /// Whether [`ArgumentParser::parse`] terminates the process (with exit code `0`) after displaying the help message.
    /// Defaults to `true`.
    ///
    /// ### Example
    /// ```
    /// # use dasharg_builder as dasharg;
    /// use dasharg::{ArgumentParser, Outcome};
    ///
    /// let mut parser = ArgumentParser::new("program")
    ///     .exit_on_help(false);
    ///
    /// assert_eq!(parser.parse(&["-help"]), Outcome::Help);
    /// ```
    pub fn exit_on_help(mut self, exit_on_help: bool) -> Self {
        self.set_exit_on_help(exit_on_help);
        self
    }

    /// Change whether [`ArgumentParser::parse`] terminates the process after displaying the help message.
    pub fn set_exit_on_help(&mut self, exit_on_help: bool) {
        self.exit_on_help = exit_on_help;
    }

    /// Whether [`ArgumentParser::parse`] terminates the process after displaying the help message.
    pub fn exits_on_help(&self) -> bool {
        self.exit_on_help
    }

    /// The program name, as shown in the usage line.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Declare an argument.
    ///
    /// An argument whose name is already taken (by the name or alias of an earlier argument, ignoring case) is ignored.
    /// Arguments are listed in the help message in the order they are declared.
    ///
    /// ### Example
    /// ```
    /// # use dasharg_builder as dasharg;
    /// use dasharg::{ArgumentParser, FlagArgument, ValueArgument};
    ///
    /// let parser = ArgumentParser::new("program")
    ///     .add(ValueArgument::new("translator", "deepl"))
    ///     .add(FlagArgument::new("TRANSLATOR"));
    ///
    /// assert_eq!(parser.arguments().len(), 1);
    /// assert!(parser.find_value("translator").is_some());
    /// ```
    pub fn add(mut self, argument: impl Into<Argument>) -> Self {
        self.arguments.add(argument.into());
        self
    }

    /// The declared (and discovered) arguments, in order.
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// Find the argument by name (or alias), ignoring case.
    /// Every name is checked before any alias.
    pub fn find(&self, name: &str) -> Option<&Argument> {
        self.arguments.find(name)
    }

    /// Find the argument by name (or alias), ignoring case, for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Argument> {
        self.arguments.find_mut(name)
    }

    /// Whether the name (or alias) is known to this parser.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Whether the argument is known and has been set.
    pub fn is_set(&self, name: &str) -> bool {
        self.find(name)
            .map(Argument::has_been_set)
            .unwrap_or(false)
    }

    /// Find the value argument by name (or alias), ignoring case.
    /// A flag argument is not found.
    pub fn find_value(&self, name: &str) -> Option<&ValueArgument> {
        self.find(name).and_then(Argument::as_value)
    }

    /// Find the value argument by name (or alias), ignoring case, for modification.
    pub fn find_value_mut(&mut self, name: &str) -> Option<&mut ValueArgument> {
        self.find_mut(name).and_then(Argument::as_value_mut)
    }

    /// Assign the value to the value argument.
    ///
    /// When no such value argument exists, an optional one is appended with `value` as its default (and it does not count as set).
    ///
    /// ### Example
    /// ```
    /// # use dasharg_builder as dasharg;
    /// use dasharg::{ArgumentParser, ValueArgument};
    ///
    /// let mut parser = ArgumentParser::new("program")
    ///     .add(ValueArgument::new("lang", "en:de"));
    ///
    /// parser.set_raw("LANG", "fr:de");
    /// parser.set_raw("translator", "google");
    ///
    /// assert!(parser.is_set("lang"));
    /// assert_eq!(parser.get_string("lang").unwrap(), "fr:de");
    /// assert!(!parser.is_set("translator"));
    /// assert_eq!(parser.get_string("translator").unwrap(), "google");
    /// ```
    pub fn set_raw(&mut self, name: &str, value: impl IntoValue) {
        self.arguments.set_raw(name, value);
    }

    /// Assign the string value (see [`ArgumentParser::set_raw`]).
    pub fn set_string(&mut self, name: &str, value: impl Into<String>) {
        self.set_raw(name, value.into());
    }

    /// Assign the boolean value (see [`ArgumentParser::set_raw`]).
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set_raw(name, value);
    }

    /// Assign the integer value (see [`ArgumentParser::set_raw`]).
    pub fn set_int(&mut self, name: &str, value: i32) {
        self.set_raw(name, value);
    }

    /// Assign the path value, in its absolute form (see [`ArgumentParser::set_raw`]).
    pub fn set_path(&mut self, name: &str, value: impl AsRef<Path>) {
        self.set_raw(name, value.as_ref());
    }

    fn value_argument(&self, name: &str) -> Result<&ValueArgument, ValueError> {
        self.find_value(name)
            .ok_or_else(|| ValueError::UnknownArgument(name.to_string()))
    }

    /// Read the value of the value argument as a `String`.
    pub fn get_string(&self, name: &str) -> Result<String, ValueError> {
        self.value_argument(name)?.get_string()
    }

    /// Read the value of the value argument as a `bool`.
    ///
    /// ### Example
    /// ```
    /// # use dasharg_builder as dasharg;
    /// use dasharg::{ArgumentParser, ValueArgument, ValueError};
    ///
    /// let mut parser = ArgumentParser::new("program")
    ///     .add(ValueArgument::new("headless", true));
    ///
    /// parser.parse_tokens(&["-headless", "yes"]);
    ///
    /// assert!(matches!(parser.get_bool("headless"), Err(ValueError::InvalidFormat { .. })));
    /// assert!(matches!(parser.get_bool("visible"), Err(ValueError::UnknownArgument(_))));
    /// ```
    pub fn get_bool(&self, name: &str) -> Result<bool, ValueError> {
        self.value_argument(name)?.get_bool()
    }

    /// Read the value of the value argument as an `i32`.
    pub fn get_int(&self, name: &str) -> Result<i32, ValueError> {
        self.value_argument(name)?.get_int()
    }

    /// Read the value of the value argument as a path.
    pub fn get_path(&self, name: &str) -> Result<PathBuf, ValueError> {
        self.value_argument(name)?.get_path()
    }

    /// Run the command line parser against the input tokens.
    ///
    /// When the first token asks for help (it contains `-help`, ignoring case), the help message is displayed and no argument is modified.
    /// Otherwise, the tokens are matched into flags and values, which are then applied to the arguments:
    /// * a flag marks its argument set, or appends a (set) flag argument when the name is unknown, and
    /// * a value is assigned as per [`ArgumentParser::set_raw`].
    ///
    /// Tokens that neither name an argument nor follow one are ignored.
    /// This never terminates the process (see [`ArgumentParser::parse`]).
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Outcome {
        if is_help(tokens) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested via '{}'.", tokens[0]);
            }
            self.print_help();
            return Outcome::Help;
        }

        self.arguments.apply(match_tokens(tokens));
        Outcome::Parsed
    }

    /// Render the full help message.
    ///
    /// ### Example
    /// ```
    /// # use dasharg_builder as dasharg;
    /// use dasharg::{ArgumentParser, FlagArgument};
    ///
    /// let parser = ArgumentParser::new("program")
    ///     .add(FlagArgument::new("verbose"));
    ///
    /// let help = parser.render_help();
    /// assert!(help.starts_with("Usage: program [OPTIONS]"));
    /// assert!(help.ends_with("-help\nDisplays this help message."));
    /// ```
    pub fn render_help(&self) -> String {
        self.printer
            .render_help(&self.program, self.arguments.as_slice())
            .join("\n")
    }

    /// Display the full help message.
    pub fn print_help(&self) {
        self.printer.print_help(
            &self.program,
            self.arguments.as_slice(),
            self.user_interface.as_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FlagArgument, MissingRequiredValue};
    use crate::parser::util::channel_interface;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn translator(user_interface: Box<dyn UserInterface>) -> ArgumentParser {
        ArgumentParser::with_interface("translator", user_interface)
            .with_printer(Printer::empty())
            .exit_on_help(false)
            .add(ValueArgument::new("headless", true).describe("Run the browser invisibly."))
            .add(
                ValueArgument::new("lang", "en:de")
                    .with_alias("language")
                    .describe("The language pair."),
            )
            .add(ValueArgument::new("translator", "deepl"))
            .add(
                ValueArgument::new("driverpath", "geckodriver")
                    .with_alias("path")
                    .required(),
            )
            .add(FlagArgument::new("verbose"))
    }

    #[test]
    fn parse_tokens_empty() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        // Execute
        let outcome = parser.parse_tokens(&[]);

        // Verify
        assert_eq!(outcome, Outcome::Parsed);
        assert!(parser.arguments().iter().all(|a| !a.has_been_set()));
        assert_eq!(parser.arguments().len(), 5);

        drop(parser);
        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[test]
    fn parse_tokens() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        // Execute
        let outcome = parser.parse_tokens(&[
            "-headless",
            "FALSE",
            "-Language",
            "en:fr",
            "-path",
            "chromedriver",
            "-verbose",
        ]);

        // Verify
        assert_eq!(outcome, Outcome::Parsed);
        assert!(!parser.get_bool("headless").unwrap());
        assert_eq!(parser.get_string("lang").unwrap(), "en:fr");
        assert_eq!(
            parser.get_path("driverpath").unwrap(),
            PathBuf::from("chromedriver")
        );
        assert!(parser.is_set("verbose"));
        assert!(!parser.is_set("translator"));
        assert_eq!(parser.get_string("translator").unwrap(), "deepl");

        drop(parser);
        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[test]
    fn parse_tokens_flag_then_value() {
        // Setup
        let (sender, _receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        // Execute
        parser.parse_tokens(&["-flag", "-other", "x"]);

        // Verify
        assert!(parser.is_set("flag"));
        assert_eq!(parser.find_value("flag"), None);
        assert!(!parser.is_set("other"));
        assert_eq!(parser.get_string("other").unwrap(), "x");
        assert_eq!(parser.arguments().len(), 7);
        assert_eq!(parser.arguments()[5].name(), "flag");
        assert_eq!(parser.arguments()[6].name(), "other");
    }

    #[test]
    fn parse_tokens_repeated() {
        // Setup
        let (sender, _receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        // Execute
        parser.parse_tokens(&["-lang", "value1", "-lang", "value2"]);

        // Verify
        assert_eq!(parser.get_string("lang").unwrap(), "value2");
    }

    #[test]
    fn parse_tokens_flag_on_value_argument() {
        // Setup
        let (sender, _receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        // Execute
        parser.parse_tokens(&["-driverpath"]);

        // Verify
        assert!(parser.is_set("driverpath"));
        assert_eq!(parser.get_string("driverpath").unwrap(), "geckodriver");
    }

    #[rstest]
    #[case(vec!["-help"])]
    #[case(vec!["-HELP", "-verbose"])]
    #[case(vec!["--help", "-lang", "en:fr"])]
    fn parse_tokens_help(#[case] tokens: Vec<&str>) {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        // Execute
        let outcome = parser.parse_tokens(tokens.as_slice());

        // Verify
        assert_eq!(outcome, Outcome::Help);
        assert!(parser.arguments().iter().all(|a| !a.has_been_set()));
        assert_eq!(parser.get_string("lang").unwrap(), "en:de");
        assert_eq!(parser.arguments().len(), 5);

        drop(parser);
        let message = receiver.consume_message();
        assert_contains!(message, "Usage: translator [OPTIONS]");
        assert_contains!(message, "This Argument is required.\n-driverpath <Value>");
        assert_contains!(message, "-help\nDisplays this help message.");
    }

    #[test]
    fn parse_tokens_help_not_first() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        // Execute
        let outcome = parser.parse_tokens(&["-verbose", "-help"]);

        // Verify
        assert_eq!(outcome, Outcome::Parsed);
        assert!(parser.is_set("verbose"));
        assert!(parser.is_set("help"));

        drop(parser);
        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[test]
    fn add_duplicate() {
        let (sender, _receiver) = channel_interface();
        let parser = translator(Box::new(sender))
            .add(FlagArgument::new("HEADLESS"))
            .add(FlagArgument::new("path"));

        assert_eq!(parser.arguments().len(), 5);
        assert_eq!(parser.get_string("headless").unwrap(), "true");
    }

    #[test]
    fn find() {
        let (sender, _receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        assert_eq!(parser.find("LANG").map(Argument::name), Some("lang"));
        assert_eq!(parser.find("Language").map(Argument::name), Some("lang"));
        assert_eq!(parser.find("verbose").map(Argument::name), Some("verbose"));
        assert_eq!(parser.find("unknown"), None);
        assert!(parser.contains("PATH"));
        assert!(!parser.contains("unknown"));

        assert_eq!(parser.find_value("verbose"), None);
        assert_eq!(parser.find_value_mut("verbose"), None);
        parser
            .find_value_mut("language")
            .unwrap()
            .set_value("en:es");
        assert_eq!(parser.get_string("lang").unwrap(), "en:es");

        parser.find_mut("verbose").unwrap().mark_set();
        assert!(parser.is_set("verbose"));
    }

    #[test]
    fn typed_setters() {
        let (sender, _receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));

        parser.set_bool("headless", false);
        parser.set_string("lang", "de:en");
        parser.set_int("retries", 3);
        parser.set_path("driverpath", "/opt/geckodriver");

        assert!(!parser.get_bool("headless").unwrap());
        assert_eq!(parser.get_string("lang").unwrap(), "de:en");
        assert_eq!(parser.get_int("retries").unwrap(), 3);
        assert!(!parser.is_set("retries"));
        assert!(parser.is_set("driverpath"));
        assert!(parser.get_path("driverpath").unwrap().is_absolute());
    }

    #[test]
    fn get_unknown() {
        let (sender, _receiver) = channel_interface();
        let parser = translator(Box::new(sender));

        assert_matches!(parser.get_string("unknown"), Err(ValueError::UnknownArgument(n)) if n == "unknown");
        assert_matches!(parser.get_bool("verbose"), Err(ValueError::UnknownArgument(_)));
        assert_matches!(parser.get_int("unknown"), Err(ValueError::UnknownArgument(_)));
        assert_matches!(parser.get_path("unknown"), Err(ValueError::UnknownArgument(_)));
    }

    #[test]
    fn get_required_unset() {
        let (sender, _receiver) = channel_interface();
        let parser = translator(Box::new(sender));

        let error = parser.get_path("driverpath").unwrap_err();
        assert_matches!(
            error,
            ValueError::MissingRequired(MissingRequiredValue { .. })
        );
        assert_eq!(
            error.to_string(),
            "Required argument '-driverpath' has not been set."
        );
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case("-7", Some(-7))]
    #[case("4.2", None)]
    #[case("forty", None)]
    fn get_int(#[case] value: &str, #[case] expected: Option<i32>) {
        let (sender, _receiver) = channel_interface();
        let mut parser = translator(Box::new(sender));
        parser.set_raw("count", value);

        match expected {
            Some(expected) => assert_eq!(parser.get_int("count").unwrap(), expected),
            None => assert_matches!(
                parser.get_int("count"),
                Err(ValueError::InvalidFormat { type_name: "i32", .. })
            ),
        }
    }

    #[test]
    fn render_help() {
        let (sender, receiver) = channel_interface();
        let parser = translator(Box::new(sender));

        let help = parser.render_help();
        parser.print_help();

        drop(parser);
        assert_eq!(receiver.consume_message(), help);
        assert_contains!(
            help,
            "This Argument is optional.\n-lang <Value>\nThe language pair.\nExample: -lang en:de"
        );
    }

    #[test]
    fn configuration() {
        let parser = ArgumentParser::new("program");
        assert_eq!(parser.program(), "program");
        assert!(parser.exits_on_help());

        let mut parser = parser.exit_on_help(false);
        assert!(!parser.exits_on_help());
        parser.set_exit_on_help(true);
        assert!(parser.exits_on_help());
    }
}
