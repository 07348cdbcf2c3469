/// Whether an option must appear on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Requirement {
    /// The option may be omitted.
    #[default]
    Optional,
    /// Omitting the option is a parse error (unless help is requested).
    Required,
}

/// The outcome of a parse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserState {
    /// The program should stop: either a parse error occurred or help was requested.
    pub should_exit: bool,
    /// At least one user input error was found.
    pub had_error: bool,
}

impl ParserState {
    /// The conventional process exit code for this state, if the program should exit.
    ///
    /// ### Example
    /// ```
    /// # use declopt_builder as declopt;
    /// use declopt::ParserState;
    ///
    /// assert_eq!(ParserState { should_exit: false, had_error: false }.exit_code(), None);
    /// assert_eq!(ParserState { should_exit: true, had_error: false }.exit_code(), Some(0));
    /// assert_eq!(ParserState { should_exit: true, had_error: true }.exit_code(), Some(1));
    /// ```
    pub fn exit_code(&self) -> Option<i32> {
        match (self.should_exit, self.had_error) {
            (false, _) => None,
            (true, false) => Some(0),
            (true, true) => Some(1),
        }
    }
}
