use log::{debug, trace, warn};

use crate::{
    error::InputError,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::Token,
        session::{event::Event, state::State},
    },
    operator::Operator,
};

/// Stores the state of one interactive calculator session.
///
/// The session owns the left operand of the calculation in progress, the last
/// computed result and the one-slot memory register. It is driven one token at
/// a time through [`Session::feed`], and through [`Session::advance`] whenever
/// it sits in a state that needs no input.
///
/// ## Usage
///
/// ```
/// use memcalc::interpreter::{
///     lexer::tokenize,
///     session::{core::Session, event::Event, state::State},
/// };
///
/// let mut session = Session::new();
/// for token in tokenize("10 + 5") {
///     session.feed(token);
/// }
/// assert_eq!(session.state(), State::ResultReady);
/// assert_eq!(session.advance(), Some(Event::Result(15.0)));
/// assert_eq!(session.state(), State::AwaitingMemoryDirective);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    state:       State,
    /// Left operand of the calculation in progress.
    left:        Option<f64>,
    /// Result of the last successful evaluation.
    last_result: Option<f64>,
    /// The memory register. Lives as long as the session.
    memory:      f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session waiting for its first number, with memory cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self { state:       State::AwaitingLeftOperand,
               left:        None,
               last_result: None,
               memory:      0.0, }
    }

    /// The state the session is in.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// The value held in the memory register.
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory
    }

    /// The result of the last successful evaluation, if it has not been
    /// discarded by a restart.
    #[must_use]
    pub const fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// The left operand the next operator will be applied to.
    #[must_use]
    pub const fn left_operand(&self) -> Option<f64> {
        self.left
    }

    /// Returns `true` once the session has reached `Terminated`.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, State::Terminated)
    }

    /// Consumes one token in the current state.
    ///
    /// Returns the event the user should see, if any. Feeding a token while
    /// the session does not await input (`ResultReady` or `Terminated`) has no
    /// effect.
    ///
    /// # Example
    /// ```
    /// use memcalc::{
    ///     error::EvalError,
    ///     interpreter::{
    ///         lexer::Token,
    ///         session::{core::Session, event::Event, state::State},
    ///     },
    ///     operator::Operator,
    /// };
    ///
    /// let mut session = Session::new();
    /// session.feed(Token::Number(4.0));
    /// session.feed(Token::Operator(Operator::Divide));
    ///
    /// let event = session.feed(Token::Number(0.0));
    /// assert_eq!(event, Some(Event::Failed(EvalError::DivisionByZero)));
    /// assert_eq!(session.state(), State::AwaitingOperator);
    /// assert_eq!(session.left_operand(), Some(4.0));
    /// ```
    pub fn feed(&mut self, token: Token) -> Option<Event> {
        let before = self.state;
        trace!("{before:?} <- {token}");

        let event = match before {
            State::AwaitingLeftOperand => self.read_left_operand(token),
            State::AwaitingOperator => self.read_operator(token),
            State::AwaitingRightOperand(op) => self.read_right_operand(op, token),
            State::AwaitingMemoryDirective => self.read_memory_directive(token),
            State::AwaitingFlowDirective => self.read_flow_directive(token),
            State::ResultReady | State::Terminated => {
                warn!("ignoring token '{token}' in state {before:?}");
                None
            },
        };

        if self.state != before {
            debug!("{before:?} -> {:?}", self.state);
        }

        event
    }

    /// Moves through a state that needs no input.
    ///
    /// From `ResultReady` this reports the last result and moves on to
    /// `AwaitingMemoryDirective`. In every other state it does nothing.
    pub fn advance(&mut self) -> Option<Event> {
        match (self.state, self.last_result) {
            (State::ResultReady, Some(result)) => {
                self.state = State::AwaitingMemoryDirective;
                debug!("ResultReady -> AwaitingMemoryDirective");
                Some(Event::Result(result))
            },
            _ => None,
        }
    }

    /// Ends the session because input ran out.
    ///
    /// Behaves like `quit` from any state; it is not an error.
    pub fn end_of_input(&mut self) {
        if !self.is_terminated() {
            debug!("end of input in state {:?}", self.state);
            self.state = State::Terminated;
        }
    }

    fn read_left_operand(&mut self, token: Token) -> Option<Event> {
        match token {
            Token::Number(value) => {
                self.left = Some(value);
                self.state = State::AwaitingOperator;
                None
            },
            other => {
                Some(Event::Rejected(InputError::ExpectedNumber { token: other.to_string() }))
            },
        }
    }

    fn read_operator(&mut self, token: Token) -> Option<Event> {
        match token {
            Token::Operator(op) if op.is_unary() => self.compute(op, None),
            Token::Operator(op) => {
                self.state = State::AwaitingRightOperand(op);
                None
            },
            other => {
                Some(Event::Rejected(InputError::ExpectedOperator { token: other.to_string() }))
            },
        }
    }

    fn read_right_operand(&mut self, op: Operator, token: Token) -> Option<Event> {
        match token {
            Token::Number(value) => self.compute(op, Some(value)),
            other => {
                Some(Event::Rejected(InputError::ExpectedNumber { token: other.to_string() }))
            },
        }
    }

    /// Runs the evaluator on the current left operand.
    ///
    /// On failure the left operand is kept and the session goes back to
    /// `AwaitingOperator`.
    fn compute(&mut self, op: Operator, right: Option<f64>) -> Option<Event> {
        let Some(left) = self.left else {
            // Unreachable through `feed`: operators are only read once a left
            // operand is set.
            self.state = State::AwaitingLeftOperand;
            return None;
        };

        match Evaluator::evaluate(op, left, right) {
            Ok(result) => {
                self.last_result = Some(result);
                self.state = State::ResultReady;
                None
            },
            Err(e) => {
                self.state = State::AwaitingOperator;
                Some(Event::Failed(e))
            },
        }
    }

    fn read_memory_directive(&mut self, token: Token) -> Option<Event> {
        self.state = State::AwaitingFlowDirective;

        match token {
            Token::MemoryInsert => {
                if let Some(result) = self.last_result {
                    self.memory = result;
                }
                debug!("memory <- {}", self.memory);
                None
            },
            Token::MemoryClear => {
                self.memory = 0.0;
                debug!("memory cleared");
                None
            },
            other => Some(Event::UnknownMemoryCommand(other.to_string())),
        }
    }

    fn read_flow_directive(&mut self, token: Token) -> Option<Event> {
        match token {
            Token::Restart => {
                self.left = None;
                self.last_result = None;
                self.state = State::AwaitingLeftOperand;
                None
            },
            Token::Reuse => match self.last_result {
                Some(result) => self.resume_with(result),
                None => {
                    warn!("'reuse' without a result in state {:?}", self.state);
                    Some(Event::UnknownFlowCommand(token.to_string()))
                },
            },
            Token::MemoryRecall => self.resume_with(self.memory),
            Token::Quit => {
                self.state = State::Terminated;
                None
            },
            other => Some(Event::UnknownFlowCommand(other.to_string())),
        }
    }

    /// Presets the left operand and jumps straight to `AwaitingOperator`.
    fn resume_with(&mut self, value: f64) -> Option<Event> {
        self.left = Some(value);
        self.state = State::AwaitingOperator;
        Some(Event::Resumed(value))
    }
}
