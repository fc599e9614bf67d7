/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. The evaluator uses
/// them to turn a factorial operand into an exact integer and to bring the
/// exact product back into an `f64`.
pub mod num;
/// Sequential search over a slice.
///
/// A small, stateless helper that scans a caller-declared prefix of a slice
/// for the first element equal to a target.
pub mod search;
