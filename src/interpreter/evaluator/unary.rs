use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::{f64_to_u64_checked, u128_to_f64_exact},
};

impl Evaluator {
    /// Evaluates the factorial of `value`.
    ///
    /// The operand must be a non-negative integer; `0! = 1`. The product is
    /// accumulated exactly in a `u128` and returned only if the `f64` holds it
    /// without rounding. From `23!` on that is no longer the case, and the
    /// evaluation fails with `Overflow` instead of returning an approximation.
    ///
    /// # Parameters
    /// - `value`: The operand.
    ///
    /// # Returns
    /// The factorial as an `f64`, wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use memcalc::{error::EvalError, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_factorial(0.0).unwrap(), 1.0);
    /// assert_eq!(Evaluator::eval_factorial(5.0).unwrap(), 120.0);
    ///
    /// let err = Evaluator::eval_factorial(-1.0).unwrap_err();
    /// assert!(matches!(err, EvalError::InvalidOperands { .. }));
    ///
    /// let err = Evaluator::eval_factorial(2.5).unwrap_err();
    /// assert!(matches!(err, EvalError::InvalidOperands { .. }));
    ///
    /// assert_eq!(Evaluator::eval_factorial(22.0).unwrap(), 1_124_000_727_777_607_680_000.0);
    ///
    /// let err = Evaluator::eval_factorial(23.0).unwrap_err();
    /// assert!(matches!(err, EvalError::Overflow { .. }));
    /// ```
    pub fn eval_factorial(value: f64) -> EvalResult<f64> {
        let n = f64_to_u64_checked(value).map_err(|e| match e {
                                             EvalError::InvalidOperands { details } => {
                                                 EvalError::InvalidOperands { details: format!("factorial is only defined for non-negative integers, but {details}") }
                                             },
                                             other => other,
                                         })?;

        let overflow = || EvalError::Overflow { details: format!("{n}! cannot be represented exactly") };

        let mut result = 1u128;
        for k in 2..=u128::from(n) {
            result = result.checked_mul(k).ok_or_else(overflow)?;
        }

        u128_to_f64_exact(result).ok_or_else(overflow)
    }
}
