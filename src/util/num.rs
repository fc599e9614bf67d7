use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative and
/// not fractional.
///
/// ## Errors
/// - `EvalError::InvalidOperands` for non-finite, negative or fractional
///   values.
/// - `EvalError::Overflow` for integral values above `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use memcalc::{error::EvalError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0).unwrap(), 7);
///
/// let err = f64_to_u64_checked(-5.0).unwrap_err();
/// assert!(matches!(err, EvalError::InvalidOperands { .. }));
///
/// let err = f64_to_u64_checked(1.25).unwrap_err();
/// assert!(matches!(err, EvalError::InvalidOperands { .. }));
///
/// let err = f64_to_u64_checked(1e20).unwrap_err();
/// assert!(matches!(err, EvalError::Overflow { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> EvalResult<u64> {
    if !value.is_finite() {
        return Err(EvalError::InvalidOperands { details: format!("{value} is not a finite number") });
    }
    if value < 0.0 {
        return Err(EvalError::InvalidOperands { details: format!("{value} is negative") });
    }
    if value.fract() != 0.0 {
        return Err(EvalError::InvalidOperands { details: format!("{value} is not an integer") });
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(EvalError::Overflow { details: format!("{value} is too large to convert to an integer") });
    }
    Ok(value as u64)
}

/// Converts a `u128` to `f64` if and only if the value survives the round
/// trip unchanged.
///
/// Every value up to `2^53` converts exactly; above that only values whose
/// low bits are zero do.
///
/// ## Example
/// ```
/// use memcalc::util::num::u128_to_f64_exact;
///
/// assert_eq!(u128_to_f64_exact(5040), Some(5040.0));
/// assert_eq!(u128_to_f64_exact(1 << 100), Some(2f64.powi(100)));
/// assert_eq!(u128_to_f64_exact((1 << 53) + 1), None);
/// assert_eq!(u128_to_f64_exact(u128::MAX), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn u128_to_f64_exact(value: u128) -> Option<f64> {
    let converted = value as f64;
    // `u128::MAX` rounds up to 2^128, which saturates back to `u128::MAX`.
    (value != u128::MAX && converted as u128 == value).then_some(converted)
}
