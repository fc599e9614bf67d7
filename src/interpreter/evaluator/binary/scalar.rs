use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::Operator,
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division by zero is checked before the quotient is formed; both `0.0`
    /// and `-0.0` count as zero, and the dividend plays no part in the check.
    /// The operator must be one of `Add`, `Subtract`, `Multiply` or `Divide`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use memcalc::{
    ///     error::EvalError,
    ///     interpreter::evaluator::core::Evaluator,
    ///     operator::Operator,
    /// };
    ///
    /// let result = Evaluator::eval_scalar_op(Operator::Multiply, 1.5, 2.0).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// let err = Evaluator::eval_scalar_op(Operator::Divide, 4.0, 0.0).unwrap_err();
    /// assert_eq!(err, EvalError::DivisionByZero);
    /// ```
    pub fn eval_scalar_op(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        use Operator::{Add, Divide, Multiply, Subtract};

        match op {
            Add => Ok(left + right),
            Subtract => Ok(left - right),
            Multiply => Ok(left * right),
            Divide => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            _ => Err(EvalError::InvalidOperands { details: format!("'{op}' is not a scalar arithmetic operator") }),
        }
    }
}
