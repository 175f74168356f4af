use terminal_size::{terminal_size, Width};

use crate::api::Argument;
use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::TextWidth;

pub(crate) struct Printer {
    text_width: Option<TextWidth>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(None)
    }

    /// Produce a printer that wraps descriptions to the terminal (when there is one).
    pub(crate) fn terminal() -> Self {
        let text_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(TextWidth::guided(terminal_width as usize))
        } else {
            None
        };

        Self::new(text_width)
    }

    pub(crate) fn new(text_width: Option<TextWidth>) -> Self {
        Self { text_width }
    }

    pub(crate) fn render_help(&self, program: &str, arguments: &[Argument]) -> Vec<String> {
        let mut lines = vec![
            format!("Usage: {program} [OPTIONS]"),
            String::default(),
            OPTIONS_HEADER.to_string(),
            String::default(),
        ];

        for argument in arguments {
            lines.extend(argument.help_lines(self.text_width.as_ref()));
            lines.push(String::default());
        }

        lines.push(format!("{ARGUMENT_PREFIX}{HELP_NAME}"));
        lines.push(HELP_MESSAGE.to_string());
        lines
    }

    pub(crate) fn print_help(
        &self,
        program: &str,
        arguments: &[Argument],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render_help(program, arguments) {
            user_interface.print(line);
        }
    }
}
