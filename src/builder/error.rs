//! Build errors for composites and state machines.

use thiserror::Error;

/// A single structural problem found while validating a state tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("State machine '{machine}' has no top-level states")]
    NoStates { machine: String },

    /// Advisory only: reported by linting, never enforced by `build()`.
    #[error("Duplicate state name '{name}' under '{scope}'")]
    DuplicateName { scope: String, name: String },
}

/// Errors that can occur when building state trees and machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Cannot add sub-states to '{name}' after it has been entered")]
    AlreadyRunning { name: String },

    #[error("Invalid structure: {}", join(.0))]
    InvalidStructure(Vec<Violation>),
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
