use crate::interpreter::evaluator::core::Evaluator;

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Uses real-exponent semantics through `f64::powf`: fractional and
    /// negative exponents are allowed and the result may be non-integral.
    /// Any base raised to zero is `1`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// The result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use memcalc::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, 10.0), 1024.0);
    /// assert_eq!(Evaluator::eval_pow(4.0, 0.5), 2.0);
    /// assert_eq!(Evaluator::eval_pow(2.0, -1.0), 0.5);
    /// assert_eq!(Evaluator::eval_pow(-3.0, 0.0), 1.0);
    /// ```
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
