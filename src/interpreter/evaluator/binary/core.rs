use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::Operator,
};

impl Evaluator {
    /// Evaluates a binary operation between two operands.
    ///
    /// Arithmetic operators go to `eval_scalar_op` and exponentiation to
    /// `eval_pow`. `Factorial` is not binary and is rejected with
    /// `InvalidOperands`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use memcalc::{interpreter::evaluator::core::Evaluator, operator::Operator};
    ///
    /// let result = Evaluator::eval_binary(Operator::Subtract, 3.0, 4.0);
    /// assert_eq!(result.unwrap(), -1.0);
    /// ```
    pub fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        use Operator::{Add, Divide, Factorial, Multiply, Power, Subtract};

        match op {
            Add | Subtract | Multiply | Divide => Self::eval_scalar_op(op, left, right),
            Power => Ok(Self::eval_pow(left, right)),
            Factorial => {
                Err(EvalError::InvalidOperands { details: format!("factorial takes a single operand, but found {left} and {right}") })
            },
        }
    }
}
