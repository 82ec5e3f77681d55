//! Injected observation of engine lifecycle events.
//!
//! The engine does not call `tracing` directly. Every composite, and the
//! machine itself, reports what it does to an [`Observer`] supplied by the
//! host. The parent that drives a child emits the event, so leaf code stays
//! free of side effects.
//!
//! Three observers ship with the crate:
//!
//! - [`TracingObserver`]: forwards events to `tracing` (machine default)
//! - [`RecordingObserver`]: keeps events in memory
//! - [`NoopObserver`]: discards everything (default for detached composites)

mod recording;
mod trace;

pub use recording::RecordingObserver;
pub use trace::TracingObserver;

use serde::Serialize;
use std::sync::Arc;

/// Shared handle to an observer, cloned into every composite of a tree.
pub type SharedObserver = Arc<dyn Observer>;

/// Something that happened inside the engine.
///
/// `scope` is the name of the composite (or machine) that produced the event;
/// `state` is the child it acted on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// The machine found its first top-level state.
    Started { scope: String },

    /// The machine has no active top-level state anymore.
    Stopped { scope: String },

    /// A child received `enter()`.
    Entered { scope: String, state: String },

    /// A child received `exit()`.
    Exited { scope: String, state: String },

    /// A priority scan picked a child.
    Selected {
        scope: String,
        state: String,
        index: usize,
    },

    /// A higher-priority child replaced a running one.
    Preempted {
        scope: String,
        preempted: String,
        by: String,
    },

    /// A priority scan found no valid child.
    NoValidCandidate { scope: String },

    /// A sequence moved its cursor to the next child.
    SequenceAdvanced { scope: String, index: usize },

    /// A sequence ran past its last child.
    SequenceCompleted { scope: String },
}

impl EngineEvent {
    /// Name of the composite or machine that produced the event.
    pub fn scope(&self) -> &str {
        match self {
            Self::Started { scope }
            | Self::Stopped { scope }
            | Self::Entered { scope, .. }
            | Self::Exited { scope, .. }
            | Self::Selected { scope, .. }
            | Self::Preempted { scope, .. }
            | Self::NoValidCandidate { scope }
            | Self::SequenceAdvanced { scope, .. }
            | Self::SequenceCompleted { scope } => scope,
        }
    }
}

/// Receiver for engine events.
///
/// Implementations must be cheap: `on_event` runs synchronously inside the
/// host's `update()` call.
pub trait Observer: Send + Sync {
    fn on_event(&self, event: &EngineEvent);
}

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_event(&self, _event: &EngineEvent) {}
}

/// Shared handle to a [`NoopObserver`].
pub fn noop() -> SharedObserver {
    Arc::new(NoopObserver)
}
