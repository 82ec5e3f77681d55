//! Builder API for ergonomic state tree construction.
//!
//! This module provides fluent builders, helper constructors and macros for
//! assembling leaves and composites into a validated state machine.

pub mod error;
pub mod machine;
pub mod macros;
pub mod validation;

pub use error::{BuildError, Violation};
pub use machine::StateMachineBuilder;

use crate::action::{ActionState, FnAction};
use crate::composite::{DecisionState, SequenceState};
use crate::core::{Completion, State};

/// Create a closure-backed leaf.
///
/// # Example
///
/// ```
/// use strata::builder::action;
/// use strata::core::State;
///
/// let mut wave = action("Wave", |waves: &mut u32, done| {
///     *waves += 1;
///     done.mark_complete();
/// });
///
/// let mut waves = 0;
/// wave.enter(&mut waves);
/// wave.execute(&mut waves);
/// assert!(wave.is_complete());
/// ```
pub fn action<C, F>(name: impl Into<String>, step: F) -> ActionState<C, FnAction<F>>
where
    F: FnMut(&mut C, &mut Completion),
{
    ActionState::new(FnAction::new(name, step))
}

/// Create a closure-backed leaf gated by a guard predicate.
///
/// # Example
///
/// ```
/// use strata::builder::guarded_action;
/// use strata::core::State;
///
/// let rest = guarded_action(
///     "Rest",
///     |stamina: &u32| *stamina < 10,
///     |stamina: &mut u32, done| {
///         *stamina += 5;
///         done.mark_complete();
///     },
/// );
///
/// assert!(rest.is_valid(&3));
/// assert!(!rest.is_valid(&40));
/// ```
pub fn guarded_action<C, G, F>(
    name: impl Into<String>,
    guard: G,
    step: F,
) -> ActionState<C, FnAction<F>>
where
    G: Fn(&C) -> bool + Send + Sync + 'static,
    F: FnMut(&mut C, &mut Completion),
{
    action(name, step).when(guard)
}

/// Create a sequence from pre-boxed children.
///
/// Shorthand for adding each child to `SequenceState::new(name)`.
pub fn sequence<C>(name: impl Into<String>, children: Vec<Box<dyn State<C>>>) -> SequenceState<C> {
    let mut sequence = SequenceState::new(name);
    for child in children {
        sequence.push(child);
    }
    sequence
}

/// Create a decision from pre-boxed children, highest priority first.
///
/// Shorthand for adding each child to `DecisionState::new(name)`.
pub fn decision<C>(name: impl Into<String>, children: Vec<Box<dyn State<C>>>) -> DecisionState<C> {
    let mut decision = DecisionState::new(name);
    for child in children {
        decision.push(child);
    }
    decision
}
