//! Observer that forwards engine events to `tracing`.

use super::{EngineEvent, Observer};
use tracing::{debug, trace, warn};

/// Observer that emits every engine event through `tracing`.
///
/// Lifecycle changes are logged at `debug`, per-child enter/exit at `trace`,
/// and priority scans that find nothing at `warn`. Without an installed
/// subscriber this costs next to nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&self, event: &EngineEvent) {
        match event {
            EngineEvent::Started { scope } => debug!(scope = %scope, "state machine started"),
            EngineEvent::Stopped { scope } => debug!(scope = %scope, "state machine stopped"),
            EngineEvent::Entered { scope, state } => {
                trace!(scope = %scope, state = %state, "entering state")
            }
            EngineEvent::Exited { scope, state } => {
                trace!(scope = %scope, state = %state, "exiting state")
            }
            EngineEvent::Selected {
                scope,
                state,
                index,
            } => debug!(scope = %scope, state = %state, index, "selected state"),
            EngineEvent::Preempted {
                scope,
                preempted,
                by,
            } => debug!(scope = %scope, preempted = %preempted, by = %by, "preempted state"),
            EngineEvent::NoValidCandidate { scope } => {
                warn!(scope = %scope, "no valid candidate found")
            }
            EngineEvent::SequenceAdvanced { scope, index } => {
                trace!(scope = %scope, index, "sequence advanced")
            }
            EngineEvent::SequenceCompleted { scope } => {
                debug!(scope = %scope, "sequence completed")
            }
        }
    }
}
