#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_TEXT_WIDTH: usize = 17;

/// The width to which help descriptions are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TextWidth(usize);

impl TextWidth {
    #[cfg(test)]
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // width must be at least 2 (so we can hyphenate)
        if width >= 2 {
            Ok(TextWidth(width))
        } else {
            Err(())
        }
    }

    /// Produce a width based off the total (terminal) width.
    pub(crate) fn guided(total_width: usize) -> Self {
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let width = std::cmp::max(target_total_width, MINIMUM_TEXT_WIDTH);
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Total width {total_width} targets {target_total_width}.  Selecting width: {width}.");
        }

        TextWidth(width)
    }

    #[cfg(test)]
    pub(crate) fn value(&self) -> usize {
        self.0
    }

    /// Break the paragraph into lines no wider than this width.
    /// Words longer than the width are hyphenated.
    pub(crate) fn wrap(&self, paragraph: &str) -> Vec<String> {
        chunk(paragraph, self.0)
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() < width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while left + width < characters.len() {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}
