#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating one operation.
pub enum EvalError {
    /// The operator received the wrong number of operands, or an operand
    /// outside its domain (e.g. a negative or fractional factorial).
    InvalidOperands {
        /// Details describing why the operands are invalid.
        details: String,
    },
    /// The right operand of a division was zero.
    DivisionByZero,
    /// The exact result is too large to be represented.
    Overflow {
        /// Details describing the operation that overflowed.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperands { details } => write!(f, "Error: Invalid operands: {details}."),
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::Overflow { details } => write!(f,
                                                 "Error: Overflow while trying to compute result: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
