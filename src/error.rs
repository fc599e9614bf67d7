/// Evaluation errors.
///
/// Defines the failures the evaluator can report for a single operation:
/// operands outside the operator's domain, division by zero, and results that
/// cannot be represented.
pub mod eval_error;
/// Input errors.
///
/// Contains the errors raised when a token of the wrong kind arrives for the
/// current session state, such as a word where a number was expected. These
/// are always recoverable: the session keeps its state and asks again.
pub mod input_error;

pub use eval_error::EvalError;
pub use input_error::InputError;
