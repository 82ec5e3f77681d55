//! In-memory event recorder.

use super::{EngineEvent, Observer};
use std::sync::{Mutex, MutexGuard};

/// Observer that keeps every event it receives.
///
/// Useful for hosts that want to inspect what a tick did, and for tests.
///
/// # Example
///
/// ```rust
/// use strata::observer::{EngineEvent, Observer, RecordingObserver};
///
/// let recorder = RecordingObserver::new();
/// recorder.on_event(&EngineEvent::Started { scope: "bot".to_string() });
///
/// assert_eq!(recorder.len(), 1);
/// assert_eq!(recorder.take().len(), 1);
/// assert!(recorder.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<EngineEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<EngineEvent> {
        self.lock().clone()
    }

    /// Remove and return all recorded events.
    pub fn take(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic inside another observer call cannot leave the Vec half-written,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<EngineEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Observer for RecordingObserver {
    fn on_event(&self, event: &EngineEvent) {
        self.lock().push(event.clone());
    }
}
