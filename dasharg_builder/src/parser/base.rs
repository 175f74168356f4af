use crate::api::{Argument, FlagArgument, ValueArgument};
use crate::matcher::Matches;
use crate::prelude::IntoValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The declared (and discovered) arguments, in registration order.
#[derive(Debug, Default)]
pub(crate) struct Arguments {
    values: Vec<Argument>,
}

impl Arguments {
    /// Register the argument, unless its name is already taken.
    pub(crate) fn add(&mut self, argument: Argument) -> bool {
        if self.position(argument.name()).is_some() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Ignoring duplicate argument '{}'.", argument.name());
            }
            return false;
        }

        self.values.push(argument);
        true
    }

    /// Names are searched before aliases: an alias only ever matches once no argument has the name.
    fn position(&self, name: &str) -> Option<usize> {
        self.values
            .iter()
            .position(|argument| argument.matches_name(name))
            .or_else(|| {
                self.values
                    .iter()
                    .position(|argument| argument.matches_alias(name))
            })
    }

    pub(crate) fn find(&self, name: &str) -> Option<&Argument> {
        self.position(name).map(|index| &self.values[index])
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut Argument> {
        match self.position(name) {
            Some(index) => Some(&mut self.values[index]),
            None => None,
        }
    }

    pub(crate) fn as_slice(&self) -> &[Argument] {
        &self.values
    }

    /// Mark the argument as set, discovering it as a flag if it isn't known.
    pub(crate) fn mark_flag(&mut self, name: &str) {
        match self.find_mut(name) {
            Some(argument) => argument.mark_set(),
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Discovered undeclared flag '{name}'.");
                }
                let mut flag = FlagArgument::new(name);
                flag.mark_set();
                self.values.push(Argument::Flag(flag));
            }
        }
    }

    /// Assign the value onto the value argument, discovering it if it isn't known.
    ///
    /// A discovered value argument is appended as-is: it does not go through the duplicate check of `add`, and (as with any
    /// freshly constructed value argument) it does not count as set.
    pub(crate) fn set_raw(&mut self, name: &str, value: impl IntoValue) {
        match self.find_mut(name).and_then(Argument::as_value_mut) {
            Some(argument) => argument.set_value(value),
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Discovered undeclared value argument '{name}'.");
                }
                self.values
                    .push(Argument::Value(ValueArgument::new(name, value)));
            }
        }
    }

    pub(crate) fn apply(&mut self, matches: Matches) {
        let (flags, values) = matches.into_parts();

        for name in flags {
            self.mark_flag(&name);
        }

        for (name, value) in values {
            self.set_raw(&name, value);
        }
    }
}
