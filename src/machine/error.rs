//! Runtime errors for the state machine.

use thiserror::Error;

/// Misuse of the machine's lifecycle.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State machine already started; states can only be added and started once")]
    AlreadyStarted,

    #[error("State machine not started; call start() before update()")]
    NotStarted,
}
