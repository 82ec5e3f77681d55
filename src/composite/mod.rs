//! Composite states: nodes that own and drive child states.
//!
//! - [`SequenceState`]: runs children strictly in order, one at a time
//! - [`DecisionState`]: activates the highest-priority valid child
//!
//! Both satisfy the same [`State`](crate::core::State) contract as leaves, so
//! composites nest to any depth. Priority selection is implemented once in
//! [`PrioritySelector`] and shared with the top-level
//! [`StateMachine`](crate::machine::StateMachine).

mod decision;
mod selector;
mod sequence;

pub use decision::DecisionState;
pub use selector::PrioritySelector;
pub use sequence::SequenceState;

use serde::{Deserialize, Serialize};

/// Whether a running child can be interrupted by a higher-priority sibling.
///
/// With [`Preemption::NonPreemptive`] priority is evaluated only at selection
/// boundaries: on entry and whenever the active child completes. With
/// [`Preemption::Preemptive`] higher-priority siblings are re-checked on every
/// tick before the active child executes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preemption {
    #[default]
    NonPreemptive,
    Preemptive,
}

/// Outcome of a priority scan.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The child at this index was valid and has been entered.
    Selected(usize),

    /// Every child was invalid; nothing is active.
    NoValidCandidate,
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Selected(index) => Some(index),
            Self::NoValidCandidate => None,
        }
    }
}

/// Outcome of one tick at a priority-selected level.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The active child at this index received `execute()`.
    Executed(usize),

    /// The previous child (if any) was exited and a new one entered.
    Transitioned { from: Option<usize>, to: usize },

    /// A higher-priority child interrupted a running one.
    Preempted { from: usize, to: usize },

    /// The previous child (if any) was exited and no valid candidate remains.
    Exhausted { from: Option<usize> },
}

impl Tick {
    /// Index of the child active after this tick, if any.
    pub fn active(self) -> Option<usize> {
        match self {
            Self::Executed(index) => Some(index),
            Self::Transitioned { to, .. } | Self::Preempted { to, .. } => Some(to),
            Self::Exhausted { .. } => None,
        }
    }
}
