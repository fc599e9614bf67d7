use crate::{error::EvalError, operator::Operator};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The stateless arithmetic engine.
///
/// `Evaluator` carries no data; it only groups the evaluation routines. It can
/// be called from anywhere without synchronization, and the same inputs always
/// give the same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Applies `operator` to `left` and, for binary operators, `right`.
    ///
    /// Binary operators require `right`; `Factorial` requires it to be absent.
    /// A mismatch is reported as `EvalError::InvalidOperands`.
    ///
    /// # Parameters
    /// - `operator`: The operator to apply.
    /// - `left`: The left (or only) operand.
    /// - `right`: The right operand, if the operator is binary.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use memcalc::{
    ///     error::EvalError,
    ///     interpreter::evaluator::core::Evaluator,
    ///     operator::Operator,
    /// };
    ///
    /// assert_eq!(Evaluator::evaluate(Operator::Add, 10.0, Some(5.0)).unwrap(), 15.0);
    /// assert_eq!(Evaluator::evaluate(Operator::Factorial, 7.0, None).unwrap(), 5040.0);
    ///
    /// let err = Evaluator::evaluate(Operator::Multiply, 3.0, None).unwrap_err();
    /// assert!(matches!(err, EvalError::InvalidOperands { .. }));
    /// ```
    pub fn evaluate(operator: Operator, left: f64, right: Option<f64>) -> EvalResult<f64> {
        let given = 1 + usize::from(right.is_some());

        let result = if given == operator.arity() {
            match right {
                Some(right) => Self::eval_binary(operator, left, right),
                None => Self::eval_factorial(left),
            }
        } else {
            Err(EvalError::InvalidOperands { details: format!("'{operator}' ({}) takes {} operand(s), but {given} were given",
                                                              operator.name(),
                                                              operator.arity()) })
        };

        match &result {
            Ok(value) => log::trace!("evaluate {left} {operator} {right:?} = {value}"),
            Err(e) => log::debug!("evaluate {left} {operator} {right:?} failed: {e}"),
        }

        result
    }
}

/// Applies `operator` to its operands.
///
/// Shorthand for [`Evaluator::evaluate`].
///
/// # Example
/// ```
/// use memcalc::{error::EvalError, evaluate, operator::Operator};
///
/// assert_eq!(evaluate(Operator::Divide, 1.0, Some(4.0)).unwrap(), 0.25);
/// assert_eq!(evaluate(Operator::Divide, 0.0, Some(0.0)), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(operator: Operator, left: f64, right: Option<f64>) -> EvalResult<f64> {
    Evaluator::evaluate(operator, left, right)
}
