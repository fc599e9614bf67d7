#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a token that does not fit the state the session is in.
pub enum InputError {
    /// A number was expected for the left or right operand.
    ExpectedNumber {
        /// The token that was read instead.
        token: String,
    },
    /// One of `+ - * / ^ !` was expected.
    ExpectedOperator {
        /// The token that was read instead.
        token: String,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { token } => {
                write!(f, "Error: Expected a number, but found '{token}'.")
            },
            Self::ExpectedOperator { token } => write!(f,
                                                       "Error: Expected one of + - * / ^ !, but found '{token}'."),
        }
    }
}

impl std::error::Error for InputError {}
