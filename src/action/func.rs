//! Closure-backed actions.

use super::Action;
use crate::core::Completion;

/// Action whose per-tick work is a closure.
///
/// Exit is a no-op; implement [`Action`] directly when the leaf owns
/// resources that need cleanup.
///
/// # Example
///
/// ```rust
/// use strata::action::{ActionState, FnAction};
/// use strata::core::State;
///
/// let mut leaf = ActionState::new(FnAction::new("bump", |n: &mut u32, done| {
///     *n += 1;
///     if *n == 2 {
///         done.mark_complete();
///     }
/// }));
///
/// let mut n = 0;
/// leaf.enter(&mut n);
/// leaf.execute(&mut n);
/// leaf.execute(&mut n);
/// assert!(leaf.is_complete());
/// ```
pub struct FnAction<F> {
    name: String,
    step: F,
}

impl<F> FnAction<F> {
    pub fn new<C>(name: impl Into<String>, step: F) -> Self
    where
        F: FnMut(&mut C, &mut Completion),
    {
        Self {
            name: name.into(),
            step,
        }
    }
}

impl<C, F> Action<C> for FnAction<F>
where
    F: FnMut(&mut C, &mut Completion),
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, ctx: &mut C, done: &mut Completion) {
        (self.step)(ctx, done)
    }

    fn exit(&mut self, _ctx: &mut C) {}
}
