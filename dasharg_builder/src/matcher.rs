mod model;

pub(crate) use model::*;

use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Whether the tokens ask for help: the first token contains `-help`, ignoring case.
pub(crate) fn is_help(tokens: &[&str]) -> bool {
    match tokens.first() {
        Some(first) => first
            .to_lowercase()
            .contains(&format!("{ARGUMENT_PREFIX}{HELP_NAME}")),
        None => false,
    }
}

/// Aligns the raw tokens into flags and name-value pairs.
///
/// A `-name` token is held until the next token arrives:
/// * a token that does not start with `-` is its value, and
/// * anything else (or the end of the tokens) makes it a flag.
///
/// Tokens that neither name an argument nor follow one are dropped.
#[derive(Debug, Default)]
pub(crate) struct TokenMatcher {
    pending: Option<String>,
    matches: Matches,
}

impl TokenMatcher {
    pub(crate) fn feed(&mut self, token: &str) {
        match token.strip_prefix(ARGUMENT_PREFIX) {
            Some(name) => {
                if let Some(previous) = self.pending.take() {
                    self.flag(previous);
                }

                let name = name.trim();

                if name.is_empty() {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Dropping the nameless token '{token}'.");
                    }
                } else {
                    self.pending.replace(name.to_string());
                }
            }
            None => match self.pending.take() {
                Some(name) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Matched '{name}' with value '{token}'.");
                    }
                    self.matches.value(name, token);
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Dropping the unclaimed token '{token}'.");
                    }
                }
            },
        }
    }

    pub(crate) fn close(mut self) -> Matches {
        if let Some(name) = self.pending.take() {
            self.flag(name);
        }

        self.matches
    }

    fn flag(&mut self, name: String) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched flag '{name}'.");
        }
        self.matches.flag(name);
    }
}

pub(crate) fn match_tokens(tokens: &[&str]) -> Matches {
    let mut token_matcher = TokenMatcher::default();

    for token in tokens {
        token_matcher.feed(token);
    }

    token_matcher.close()
}
