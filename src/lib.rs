//! # memcalc
//!
//! memcalc is an interactive four-function calculator written in Rust, with
//! exponentiation, factorial and a single memory register. Each step applies
//! one operator to a running left operand; the result can be stored in
//! memory, and the next calculation can start fresh, continue from the
//! result, or continue from the memory value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use crate::interpreter::{lexer::tokenize, session::core::Session};

/// Provides unified error types for evaluation and input handling.
///
/// This module defines the errors an operation can fail with and the errors
/// raised for tokens that do not fit the session's current state. None of
/// them are fatal: the session reports them and carries on.
///
/// # Responsibilities
/// - Defines error enums for evaluation failures and rejected input.
/// - Implements `Display` with the messages shown to the user.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates one interactive calculation after another.
///
/// This module ties together the lexer, the evaluator and the session state
/// machine.
///
/// # Responsibilities
/// - Classifies input words into tokens.
/// - Evaluates single operations without side effects.
/// - Tracks the left operand, the last result and the memory register.
pub mod interpreter;
/// Defines the arithmetic operators.
///
/// Declares the `Operator` enum shared by the lexer, the evaluator and the
/// session, with its one-character symbols and arity.
pub mod operator;
/// General utilities for safe numeric conversion and searching.
///
/// # Responsibilities
/// - Safely convert between `f64` and integer types without silent data loss.
/// - Provide a bounded sequential search.
pub mod util;

pub use interpreter::evaluator::core::{EvalResult, evaluate};

/// Printed once when a session starts with prompts enabled.
pub const BANNER: &str =
    "+ to add, - to subtract, * to multiply, / to divide, ^ to power, ! to factorial";

/// Options controlling what a run writes besides results and notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write the banner and a prompt before every input request.
    pub prompts: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { prompts: true }
    }
}

/// Runs an interactive session until `quit` or the end of input.
///
/// Input is read line by line and split into whitespace-separated tokens,
/// which the session consumes in order. A prompt is written only when every
/// token of the previous line has been used, so `10 + 5` on one line is the
/// same as three separate lines. Bytes that are not valid UTF-8 are replaced
/// with `U+FFFD`, so they reach the session as an unknown word. Results are
/// written as `=<value>`; errors and notices are written on their own line
/// and never end the session.
///
/// # Errors
/// Returns an error only if reading the input or writing the output fails.
///
/// # Examples
/// ```
/// use memcalc::{RunOptions, run};
///
/// let mut output = Vec::new();
/// run("7 !\nmc\nquit\n".as_bytes(), &mut output, &RunOptions { prompts: false }).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "=5040\n");
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R,
                                 mut output: W,
                                 options: &RunOptions)
                                 -> io::Result<()> {
    let mut session = Session::new();
    let mut pending = VecDeque::new();
    let mut line = Vec::new();

    if options.prompts {
        writeln!(output, "{BANNER}\n")?;
    }

    loop {
        let state = session.state();

        if !state.awaits_input() {
            if session.is_terminated() {
                break;
            }
            if let Some(event) = session.advance() {
                writeln!(output, "{event}")?;
            }
            continue;
        }

        let Some(token) = pending.pop_front() else {
            if options.prompts && let Some(prompt) = state.prompt() {
                write!(output, "{prompt}")?;
            }
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                session.end_of_input();
            } else {
                pending.extend(tokenize(&String::from_utf8_lossy(&line)));
            }
            continue;
        };

        if let Some(event) = session.feed(token) {
            writeln!(output, "{event}")?;
        }
    }

    output.flush()
}

/// Runs a whole script and returns everything the session wrote.
///
/// # Errors
/// Returns an error if the transcript could not be written.
///
/// # Examples
/// ```
/// use memcalc::{RunOptions, run_script};
///
/// let quiet = RunOptions { prompts: false };
///
/// // The memory register carries 15 into the second calculation.
/// let transcript = run_script("10 + 5 mi mr + 5 mc quit", &quiet).unwrap();
/// assert_eq!(transcript, "=15\n15\n=20\n");
///
/// // A division by zero keeps the left operand for the next operator.
/// let transcript = run_script("4 / 0 * 2 mc quit", &quiet).unwrap();
/// assert_eq!(transcript, "Error: Division by zero.\n=8\n");
/// ```
pub fn run_script(source: &str, options: &RunOptions) -> io::Result<String> {
    let mut output = Vec::new();
    run(source.as_bytes(), &mut output, options)?;
    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
