/// Binary operator evaluation logic.
///
/// Handles addition, subtraction, multiplication, division and
/// exponentiation of two operands.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the factorial, the only operator that takes a single operand.
pub mod unary;

/// Core evaluation entry point.
///
/// Dispatches an operator and its operands to the binary or unary evaluator
/// and checks the operand count.
pub mod core;
