/// The evaluator module computes the result of a single operation.
///
/// Given an operator and its operands, the evaluator produces a number or a
/// well-defined failure. It owns no state and never touches the memory
/// register, so every call is referentially transparent.
///
/// # Responsibilities
/// - Applies `+ - * / ^` to two operands and `!` to one.
/// - Rejects division by zero before dividing.
/// - Computes factorials exactly and reports overflow instead of wrapping.
pub mod evaluator;
/// The lexer module classifies input words into tokens.
///
/// Input arrives line by line; each whitespace-separated word becomes one
/// token: a number, an operator, a memory or flow directive, or a plain word
/// that the session reports as unknown.
///
/// # Responsibilities
/// - Splits input lines into words.
/// - Recognizes numbers with optional sign, fraction and exponent.
/// - Recognizes operator symbols and directive keywords.
pub mod lexer;
/// The session module drives the calculator's state machine.
///
/// A session owns the current left operand, the last result and the memory
/// register. It consumes one token at a time, calls into the evaluator once
/// its operands are assembled, and decides the next state from the memory and
/// flow directives that follow every result.
///
/// # Responsibilities
/// - Defines the states of an interactive calculation and its transitions.
/// - Keeps the memory register alive across restarts.
/// - Turns evaluation failures and unknown commands into recoverable events.
pub mod session;
