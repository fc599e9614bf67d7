/// Session states.
///
/// Enumerates every point at which the calculator waits for input, plus the
/// transient `ResultReady` state and the terminal `Terminated` state.
pub mod state;

/// Session events.
///
/// Everything a step of the state machine wants the user to see: results,
/// failures, notices and echoed operands.
pub mod event;

/// The session itself and its transition logic.
pub mod core;
