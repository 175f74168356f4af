/// What a single pass of the parser did with its input tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tokens were matched and applied onto the declared arguments.
    Parsed,
    /// The help switch led the tokens; help was displayed and no argument was touched.
    Help,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
