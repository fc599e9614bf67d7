use crate::operator::Operator;

/// A state of the calculator session.
///
/// The happy path runs `AwaitingLeftOperand -> AwaitingOperator ->
/// AwaitingRightOperand -> ResultReady -> AwaitingMemoryDirective ->
/// AwaitingFlowDirective`, after which the flow directive either restarts,
/// resumes at `AwaitingOperator` with a preset left operand, or terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the first number of a fresh calculation.
    AwaitingLeftOperand,
    /// Waiting for an operator to apply to the current left operand.
    AwaitingOperator,
    /// Waiting for the right operand of the given binary operator.
    AwaitingRightOperand(Operator),
    /// A result has been computed but not yet shown.
    ResultReady,
    /// Waiting for `mi`, `mc` or any other word.
    AwaitingMemoryDirective,
    /// Waiting for `restart`, `reuse`, `mr` or `quit`.
    AwaitingFlowDirective,
    /// The session has ended. No further input is read.
    Terminated,
}

impl State {
    /// Returns `true` if the state consumes a token before it can move on.
    ///
    /// # Example
    /// ```
    /// use memcalc::interpreter::session::state::State;
    ///
    /// assert!(State::AwaitingOperator.awaits_input());
    /// assert!(!State::ResultReady.awaits_input());
    /// assert!(!State::Terminated.awaits_input());
    /// ```
    #[must_use]
    pub const fn awaits_input(self) -> bool {
        !matches!(self, Self::ResultReady | Self::Terminated)
    }

    /// The prompt written before reading input in this state, if any.
    #[must_use]
    pub const fn prompt(self) -> Option<&'static str> {
        match self {
            Self::AwaitingLeftOperand | Self::AwaitingRightOperand(_) => Some("number> "),
            Self::AwaitingOperator => Some("operator> "),
            Self::AwaitingMemoryDirective => {
                Some("\nType 'mi' to insert the number into memory, or 'mc' to clear memory\n")
            },
            Self::AwaitingFlowDirective => Some("\nType 'restart' to start again from the beginning, \
                                                 'reuse' to use the result, \n'mr' to reuse the \
                                                 number in the memory, or 'quit' to quit: "),
            Self::ResultReady | Self::Terminated => None,
        }
    }
}
