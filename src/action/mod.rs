//! Leaf states: concrete units of domain work.
//!
//! A leaf implements [`Action`] with its domain logic and is wrapped in an
//! [`ActionState`], which owns the completion flag and an optional guard and
//! satisfies the [`State`] contract on the action's behalf.

mod func;

pub use func::FnAction;

use crate::core::{Completion, Guard, State};

/// Domain hooks for a leaf state.
///
/// `execute` performs one tick of work and calls
/// [`Completion::mark_complete`] once the task is finished.
///
/// # Example
///
/// ```rust
/// use strata::action::{Action, ActionState};
/// use strata::core::{Completion, State};
///
/// struct World {
///     logs: u32,
/// }
///
/// struct ChopTree {
///     swings: u32,
/// }
///
/// impl Action<World> for ChopTree {
///     fn name(&self) -> &str {
///         "ChopTree"
///     }
///
///     fn execute(&mut self, world: &mut World, done: &mut Completion) {
///         self.swings += 1;
///         if self.swings == 3 {
///             world.logs += 1;
///             done.mark_complete();
///         }
///     }
///
///     fn exit(&mut self, _world: &mut World) {
///         self.swings = 0;
///     }
///
///     fn is_valid(&self, world: &World) -> bool {
///         world.logs < 10
///     }
/// }
///
/// let mut world = World { logs: 0 };
/// let mut chop = ActionState::new(ChopTree { swings: 0 });
///
/// chop.enter(&mut world);
/// while !chop.is_complete() {
///     chop.execute(&mut world);
/// }
/// chop.exit(&mut world);
///
/// assert_eq!(world.logs, 1);
/// ```
pub trait Action<C> {
    /// Name used in diagnostics and observer events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called when the leaf becomes active.
    ///
    /// Default implementation clears the completion flag. Override to keep
    /// progress across activations or to acquire per-run resources.
    fn enter(&mut self, _ctx: &mut C, done: &mut Completion) {
        done.reset();
    }

    /// Perform one tick of domain work.
    fn execute(&mut self, ctx: &mut C, done: &mut Completion);

    /// Release per-run resources.
    fn exit(&mut self, ctx: &mut C);

    /// Selection-time precondition. Default implementation returns `true`.
    fn is_valid(&self, _ctx: &C) -> bool {
        true
    }
}

/// Leaf state built from an [`Action`].
pub struct ActionState<C, A> {
    action: A,
    done: Completion,
    guard: Option<Guard<C>>,
}

impl<C, A: Action<C>> ActionState<C, A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            done: Completion::new(),
            guard: None,
        }
    }

    /// Gate selection of this leaf on a predicate over the context.
    ///
    /// Combined with the action's own `is_valid` by logical AND.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }

    pub fn into_inner(self) -> A {
        self.action
    }
}

impl<C, A: Action<C>> State<C> for ActionState<C, A> {
    fn name(&self) -> &str {
        self.action.name()
    }

    fn enter(&mut self, ctx: &mut C) {
        self.action.enter(ctx, &mut self.done);
    }

    fn execute(&mut self, ctx: &mut C) {
        self.action.execute(ctx, &mut self.done);
    }

    fn exit(&mut self, ctx: &mut C) {
        self.action.exit(ctx);
    }

    fn is_complete(&self) -> bool {
        self.done.is_complete()
    }

    fn is_valid(&self, ctx: &C) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(ctx)) && self.action.is_valid(ctx)
    }
}
