//! Strata: a hierarchical, cooperative, tick-driven state machine engine
//!
//! A host owns a context value and calls [`StateMachine::update`] once per
//! tick. Every node in the tree, leaf or composite, follows the same
//! [`State`] lifecycle: `enter` on activation, `execute` once per tick while
//! active, `exit` on deactivation. Nothing runs in the background; a tick is
//! a bounded, synchronous walk down the single active path.
//!
//! # Core Concepts
//!
//! - **State**: the lifecycle contract shared by leaves and composites
//! - **Actions**: leaves holding user behavior, optionally gated by a guard
//! - **Sequences**: run children strictly in order
//! - **Decisions**: activate the highest-priority valid child
//! - **Observers**: receive structured lifecycle events, `tracing` by default
//!
//! # Example
//!
//! ```rust
//! use strata::builder::{action, StateMachineBuilder};
//! use strata::{decision, sequence};
//!
//! #[derive(Default)]
//! struct Sentry {
//!     alarm: bool,
//!     visited: Vec<&'static str>,
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .name("guard")
//!     .state(decision!("Behavior";
//!         action("RaiseAlarm", |g: &mut Sentry, done| {
//!             g.visited.push("alarm");
//!             g.alarm = false;
//!             done.mark_complete();
//!         })
//!         .when(|g: &Sentry| g.alarm),
//!         sequence!("Patrol";
//!             action("GoToA", |g: &mut Sentry, done| {
//!                 g.visited.push("A");
//!                 done.mark_complete();
//!             }),
//!             action("GoToB", |g: &mut Sentry, done| {
//!                 g.visited.push("B");
//!                 done.mark_complete();
//!             }),
//!         ),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let mut world = Sentry::default();
//! let _ = machine.start(&mut world).unwrap();
//! assert_eq!(machine.active_path(), vec!["Behavior", "Patrol", "GoToA"]);
//!
//! for _ in 0..3 {
//!     let _ = machine.update(&mut world).unwrap();
//! }
//! assert_eq!(world.visited, vec!["A", "B"]);
//! ```

pub mod action;
pub mod builder;
pub mod composite;
pub mod core;
pub mod machine;
pub mod observer;

// Re-export commonly used types
pub use action::{Action, ActionState, FnAction};
pub use builder::{BuildError, StateMachineBuilder};
pub use composite::{DecisionState, Preemption, SequenceState, Selection, Tick};
pub use crate::core::{Completion, Guard, State, StateHistory, StateTransition};
pub use machine::{MachineConfig, MachineError, StateMachine};
pub use observer::{EngineEvent, Observer};
