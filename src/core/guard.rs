//! Guard predicates gating node selection.
//!
//! Guards are pure boolean functions over the host context. A parent checks
//! a child's guard only when it is selecting which child to activate.

/// Pure predicate that decides whether a node may be selected.
///
/// # Example
///
/// ```rust
/// use strata::core::Guard;
///
/// struct World {
///     health: u32,
/// }
///
/// let low_health = Guard::new(|w: &World| w.health < 30);
///
/// assert!(low_health.check(&World { health: 10 }));
/// assert!(!low_health.check(&World { health: 80 }));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic for a given context and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self
    where
        C: 'static,
    {
        Self::new(|_| true)
    }

    /// Check whether the guard allows selection against this context.
    pub fn check(&self, ctx: &C) -> bool {
        (self.predicate)(ctx)
    }
}

impl<C> std::fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct World {
        enemies: u32,
        daylight: bool,
    }

    #[test]
    fn guard_allows_matching_contexts() {
        let guard = Guard::new(|w: &World| w.enemies > 0);

        assert!(guard.check(&World {
            enemies: 2,
            daylight: true
        }));
        assert!(!guard.check(&World {
            enemies: 0,
            daylight: true
        }));
    }

    #[test]
    fn always_guard_passes() {
        let guard = Guard::always();
        assert!(guard.check(&World {
            enemies: 0,
            daylight: false
        }));
    }

    #[test]
    fn guard_is_deterministic() {
        let world = World {
            enemies: 1,
            daylight: false,
        };
        let guard = Guard::new(|w: &World| w.enemies > 0 && !w.daylight);

        assert_eq!(guard.check(&world), guard.check(&world));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|w: &World| matches!((w.enemies, w.daylight), (0, true) | (1..=3, _)));

        assert!(guard.check(&World {
            enemies: 0,
            daylight: true
        }));
        assert!(guard.check(&World {
            enemies: 3,
            daylight: false
        }));
        assert!(!guard.check(&World {
            enemies: 0,
            daylight: false
        }));
        assert!(!guard.check(&World {
            enemies: 7,
            daylight: true
        }));
    }
}
