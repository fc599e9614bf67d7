/// Routes a binary operator to its handler.
pub mod core;
/// Exponentiation.
pub mod power;
/// The four scalar arithmetic operations.
pub mod scalar;
