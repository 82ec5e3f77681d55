//! Completion-flag bookkeeping shared by every node variant.

/// Per-activation "done" flag.
///
/// Leaves flip it from their own execution logic; sequences flip it once the
/// cursor runs past the last child. The flag is cleared on every `enter()` so
/// a node can be re-entered after it previously completed.
///
/// # Example
///
/// ```rust
/// use strata::core::Completion;
///
/// let mut done = Completion::new();
/// assert!(!done.is_complete());
///
/// done.mark_complete();
/// assert!(done.is_complete());
///
/// done.reset();
/// assert!(!done.is_complete());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Completion {
    complete: bool,
}

impl Completion {
    /// Create a fresh, incomplete flag.
    pub fn new() -> Self {
        Self { complete: false }
    }

    /// Signal that the current activation has finished its unit of work.
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }

    /// Clear the flag for a new activation.
    pub fn reset(&mut self) {
        self.complete = false;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
