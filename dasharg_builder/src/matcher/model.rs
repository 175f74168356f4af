/// The outcome of matching a token vector, still as raw strings.
///
/// Flags are recorded in the order they were discovered.
/// Values are keyed on the exact name token: a repeated name keeps its first position, but takes its last value.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Matches {
    flags: Vec<String>,
    values: Vec<(String, String)>,
}

impl Matches {
    pub(crate) fn flag(&mut self, name: impl Into<String>) {
        self.flags.push(name.into());
    }

    pub(crate) fn value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.values.iter_mut().find(|(existing, _)| existing == &name) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((name, value)),
        }
    }

    #[cfg(test)]
    pub(crate) fn flags(&self) -> &[String] {
        &self.flags
    }

    #[cfg(test)]
    pub(crate) fn values(&self) -> &[(String, String)] {
        &self.values
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<(String, String)>) {
        (self.flags, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_ordered() {
        let mut matches = Matches::default();
        matches.flag("b");
        matches.flag("a");
        matches.flag("b");
        assert_eq!(matches.flags(), ["b", "a", "b"]);
        assert!(matches.values().is_empty());
    }

    #[test]
    fn values_last_write_wins() {
        let mut matches = Matches::default();
        matches.value("name", "value1");
        matches.value("other", "x");
        matches.value("name", "value2");
        assert_eq!(
            matches.values(),
            [
                ("name".to_string(), "value2".to_string()),
                ("other".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn values_keyed_case_sensitive() {
        let mut matches = Matches::default();
        matches.value("name", "value1");
        matches.value("NAME", "value2");
        assert_eq!(matches.values().len(), 2);

        let (flags, values) = matches.into_parts();
        assert!(flags.is_empty());
        assert_eq!(values[0], ("name".to_string(), "value1".to_string()));
        assert_eq!(values[1], ("NAME".to_string(), "value2".to_string()));
    }
}
