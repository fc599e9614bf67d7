use crate::error::{EvalError, InputError};

/// Something a session step reports back to the user.
///
/// None of these end the session; termination is observed through the
/// session's state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A computed result, shown as `=<value>`.
    Result(f64),
    /// The evaluator rejected the operation. The left operand is kept.
    Failed(EvalError),
    /// A token of the wrong kind for the current state. Nothing changed.
    Rejected(InputError),
    /// An unrecognized memory directive. Memory is unchanged and the session
    /// moves on to the flow directive.
    UnknownMemoryCommand(String),
    /// An unrecognized flow directive. The session asks again.
    UnknownFlowCommand(String),
    /// The left operand was preset from the last result or from memory.
    Resumed(f64),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Result(value) => write!(f, "={value}"),
            Self::Failed(e) => write!(f, "{e}"),
            Self::Rejected(e) => write!(f, "{e}"),
            Self::UnknownMemoryCommand(_) => write!(f, "command unknown, program will go on"),
            Self::UnknownFlowCommand(token) => write!(f,
                                                      "command unknown: '{token}', type 'restart', 'reuse', 'mr' or 'quit'"),
            Self::Resumed(value) => write!(f, "{value}"),
        }
    }
}
