//! Core `State` trait implemented by every node in the tree.
//!
//! Leaves and composites satisfy the same contract, so a parent never needs
//! to know the concrete type of the children it drives.

use crate::observer::SharedObserver;

/// Lifecycle contract for a node in a hierarchical state machine.
///
/// `C` is the host context ("world") that the node reads and acts on. It is
/// threaded down the active path on every call, so nodes never keep a pointer
/// to their parent or to shared world state.
///
/// # Lifecycle
///
/// A parent drives a child through exactly this cycle:
///
/// 1. `enter()` once, when the child becomes active
/// 2. `execute()` once per tick while the child is active and incomplete
/// 3. `exit()` once, when the child stops being active (finished or abandoned)
///
/// `is_valid()` is consulted only when a parent selects a child, never while
/// a child is already running.
///
/// # Example
///
/// ```rust
/// use strata::core::State;
///
/// struct Countdown {
///     remaining: u32,
///     start: u32,
/// }
///
/// impl State<Vec<String>> for Countdown {
///     fn name(&self) -> &str {
///         "Countdown"
///     }
///
///     fn enter(&mut self, log: &mut Vec<String>) {
///         self.remaining = self.start;
///         log.push("enter".to_string());
///     }
///
///     fn execute(&mut self, _log: &mut Vec<String>) {
///         self.remaining = self.remaining.saturating_sub(1);
///     }
///
///     fn exit(&mut self, log: &mut Vec<String>) {
///         log.push("exit".to_string());
///     }
///
///     fn is_complete(&self) -> bool {
///         self.remaining == 0
///     }
/// }
///
/// let mut log = Vec::new();
/// let mut state = Countdown { remaining: 0, start: 2 };
///
/// state.enter(&mut log);
/// assert!(!state.is_complete());
/// state.execute(&mut log);
/// state.execute(&mut log);
/// assert!(state.is_complete());
/// state.exit(&mut log);
///
/// assert_eq!(log, vec!["enter", "exit"]);
/// ```
pub trait State<C> {
    /// Name used in diagnostics and observer events.
    ///
    /// Default implementation returns the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called exactly once when the node becomes active.
    ///
    /// Must reset any per-activation bookkeeping so that the node can be
    /// re-entered after previously completing.
    fn enter(&mut self, ctx: &mut C);

    /// Perform one increment of work.
    fn execute(&mut self, ctx: &mut C);

    /// Called exactly once when the node stops being active.
    fn exit(&mut self, ctx: &mut C);

    /// True once the node has finished its unit of work for this activation.
    fn is_complete(&self) -> bool;

    /// Precondition checked by a parent at selection time.
    ///
    /// Default implementation returns `true`: a node without a precondition
    /// is always eligible.
    fn is_valid(&self, _ctx: &C) -> bool {
        true
    }

    /// Receive the observer injected by the owning machine.
    ///
    /// Composites store it and forward it to their children. Leaves ignore it.
    fn attach(&mut self, _observer: &SharedObserver) {}

    /// The child currently receiving `execute()` calls, if any.
    fn active_child(&self) -> Option<&dyn State<C>> {
        None
    }

    /// Registered children in build order. Empty for leaves.
    fn children(&self) -> &[Box<dyn State<C>>] {
        &[]
    }
}

impl<C, S: State<C> + ?Sized> State<C> for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn enter(&mut self, ctx: &mut C) {
        (**self).enter(ctx)
    }

    fn execute(&mut self, ctx: &mut C) {
        (**self).execute(ctx)
    }

    fn exit(&mut self, ctx: &mut C) {
        (**self).exit(ctx)
    }

    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }

    fn is_valid(&self, ctx: &C) -> bool {
        (**self).is_valid(ctx)
    }

    fn attach(&mut self, observer: &SharedObserver) {
        (**self).attach(observer)
    }

    fn active_child(&self) -> Option<&dyn State<C>> {
        (**self).active_child()
    }

    fn children(&self) -> &[Box<dyn State<C>>] {
        (**self).children()
    }
}
