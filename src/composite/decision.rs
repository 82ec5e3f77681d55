//! Priority composite.

use super::{Preemption, PrioritySelector, Selection, Tick};
use crate::builder::BuildError;
use crate::core::{Guard, State};
use crate::observer::{noop, SharedObserver};

/// Composite that activates the highest-priority valid child.
///
/// Children are scanned in insertion order on `enter()` and again every time
/// the active child completes; the scan always restarts from the first child.
/// The decision reports complete once a scan finds no valid child, meaning it
/// has exhausted its options.
///
/// # Example
///
/// ```rust
/// use strata::builder::action;
/// use strata::composite::DecisionState;
/// use strata::core::State;
///
/// struct World {
///     hungry: bool,
///     ate: bool,
/// }
///
/// let mut decide = DecisionState::new("Needs")
///     .with_sub_state(
///         action("Eat", |w: &mut World, done| {
///             w.hungry = false;
///             w.ate = true;
///             done.mark_complete();
///         })
///         .when(|w: &World| w.hungry),
///     );
///
/// let mut world = World { hungry: true, ate: false };
/// decide.enter(&mut world);
/// assert_eq!(decide.active_child().map(|c| c.name()), Some("Eat"));
///
/// decide.execute(&mut world); // Eat runs and completes
/// decide.execute(&mut world); // Eat exits; nothing else is valid
/// assert!(world.ate);
/// assert!(decide.is_complete());
/// ```
pub struct DecisionState<C> {
    name: String,
    selector: PrioritySelector<C>,
    guard: Option<Guard<C>>,
    observer: SharedObserver,
    last_selection: Option<Selection>,
    started: bool,
}

impl<C> DecisionState<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: PrioritySelector::new(Preemption::default()),
            guard: None,
            observer: noop(),
            last_selection: None,
            started: false,
        }
    }

    /// Gate selection of this decision on a predicate over the context.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Choose whether running children can be interrupted.
    pub fn preemption(mut self, preemption: Preemption) -> Self {
        self.selector.set_preemption(preemption);
        self
    }

    /// Append a child while constructing the decision.
    ///
    /// Insertion order is priority order, highest first.
    pub fn with_sub_state<S>(mut self, child: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.push(Box::new(child));
        self
    }

    /// Append a child.
    ///
    /// Fails once the decision has been entered.
    pub fn add_sub_state(&mut self, child: Box<dyn State<C>>) -> Result<(), BuildError> {
        if self.started {
            return Err(BuildError::AlreadyRunning {
                name: self.name.clone(),
            });
        }
        self.push(child);
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selector.active_index()
    }

    /// Outcome of the most recent scan, or `None` before the first entry.
    ///
    /// `Some(Selection::NoValidCandidate)` tells a supervising composite that
    /// the decision completed because it ran out of options.
    pub fn last_selection(&self) -> Option<Selection> {
        self.last_selection
    }

    pub(crate) fn push(&mut self, mut child: Box<dyn State<C>>) {
        child.attach(&self.observer);
        self.selector.push(child);
    }
}

impl<C> State<C> for DecisionState<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, ctx: &mut C) {
        self.started = true;
        let selection = self.selector.scan(ctx, &self.name, &self.observer);
        self.last_selection = Some(selection);
    }

    fn execute(&mut self, ctx: &mut C) {
        if self.selector.active_index().is_none() {
            return;
        }
        match self.selector.step(ctx, &self.name, &self.observer) {
            Tick::Executed(_) => {}
            Tick::Transitioned { to, .. } | Tick::Preempted { to, .. } => {
                self.last_selection = Some(Selection::Selected(to));
            }
            Tick::Exhausted { .. } => self.last_selection = Some(Selection::NoValidCandidate),
        }
    }

    fn exit(&mut self, ctx: &mut C) {
        self.selector.exit_active(ctx, &self.name, &self.observer);
    }

    fn is_complete(&self) -> bool {
        self.selector.active_index().is_none()
    }

    fn is_valid(&self, ctx: &C) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(ctx))
    }

    fn attach(&mut self, observer: &SharedObserver) {
        self.observer = observer.clone();
        self.selector.attach(observer);
    }

    fn active_child(&self) -> Option<&dyn State<C>> {
        self.selector.active()
    }

    fn children(&self) -> &[Box<dyn State<C>>] {
        self.selector.children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, ActionState};
    use crate::core::Completion;
    use crate::observer::{EngineEvent, RecordingObserver};
    use std::sync::Arc;

    #[derive(Default)]
    struct World {
        valid: Vec<bool>,
        log: Vec<String>,
        // Ticks each leaf needs before it completes
        work: usize,
    }

    struct Tracked {
        id: usize,
        name: String,
        ticks: usize,
    }

    impl Action<World> for Tracked {
        fn name(&self) -> &str {
            &self.name
        }

        fn enter(&mut self, world: &mut World, done: &mut Completion) {
            done.reset();
            self.ticks = 0;
            world.log.push(format!("enter {}", self.name));
        }

        fn execute(&mut self, world: &mut World, done: &mut Completion) {
            self.ticks += 1;
            world.log.push(format!("exec {}", self.name));
            if self.ticks >= world.work {
                done.mark_complete();
            }
        }

        fn exit(&mut self, world: &mut World) {
            world.log.push(format!("exit {}", self.name));
        }

        fn is_valid(&self, world: &World) -> bool {
            world.valid[self.id]
        }
    }

    fn tracked(id: usize) -> ActionState<World, Tracked> {
        ActionState::new(Tracked {
            id,
            name: format!("C{}", id + 1),
            ticks: 0,
        })
    }

    fn three_way() -> DecisionState<World> {
        DecisionState::new("decide")
            .with_sub_state(tracked(0))
            .with_sub_state(tracked(1))
            .with_sub_state(tracked(2))
    }

    #[test]
    fn enter_activates_first_valid_child() {
        let mut decision = three_way();
        let mut world = World {
            valid: vec![false, true, true],
            work: 1,
            ..World::default()
        };

        decision.enter(&mut world);

        assert_eq!(decision.active_index(), Some(1));
        assert!(!decision.is_complete());
        assert_eq!(world.log, vec!["enter C2"]);
    }

    #[test]
    fn rescans_from_first_child_after_completion() {
        let mut decision = three_way();
        let mut world = World {
            valid: vec![false, true, true],
            work: 1,
            ..World::default()
        };

        decision.enter(&mut world);
        decision.execute(&mut world);
        world.valid = vec![true, false, true];
        decision.execute(&mut world);

        assert_eq!(decision.active_index(), Some(0));
        assert_eq!(
            world.log,
            vec!["enter C2", "exec C2", "exit C2", "enter C1"]
        );
    }

    #[test]
    fn running_child_is_not_preempted_by_default() {
        let mut decision = three_way();
        let mut world = World {
            valid: vec![false, true, false],
            work: 3,
            ..World::default()
        };

        decision.enter(&mut world);
        world.valid[0] = true;
        decision.execute(&mut world);
        decision.execute(&mut world);

        assert_eq!(decision.active_index(), Some(1));
        assert!(!world.log.iter().any(|l| l == "enter C1"));
    }

    #[test]
    fn preemptive_decision_switches_mid_run() {
        let mut decision = three_way().preemption(Preemption::Preemptive);
        let mut world = World {
            valid: vec![false, true, false],
            work: 3,
            ..World::default()
        };

        decision.enter(&mut world);
        decision.execute(&mut world);
        world.valid[0] = true;
        decision.execute(&mut world);

        assert_eq!(decision.active_index(), Some(0));
        assert_eq!(
            world.log,
            vec!["enter C2", "exec C2", "exit C2", "enter C1"]
        );
    }

    #[test]
    fn completes_when_no_child_is_valid() {
        let mut decision = three_way();
        let mut world = World {
            valid: vec![false, false, false],
            work: 1,
            ..World::default()
        };

        decision.enter(&mut world);

        assert!(decision.is_complete());
        assert!(decision.active_child().is_none());
        assert!(world.log.is_empty());

        // Executing an exhausted decision does nothing
        decision.execute(&mut world);
        assert!(world.log.is_empty());
    }

    #[test]
    fn last_selection_tracks_scans() {
        let mut decision = three_way();
        assert_eq!(decision.last_selection(), None);

        let mut world = World {
            valid: vec![false, true, false],
            work: 1,
            ..World::default()
        };
        decision.enter(&mut world);
        assert_eq!(decision.last_selection(), Some(Selection::Selected(1)));

        // Running the child does not change the outcome
        decision.execute(&mut world);
        assert_eq!(decision.last_selection(), Some(Selection::Selected(1)));

        world.valid = vec![false, false, true];
        decision.execute(&mut world);
        assert_eq!(decision.last_selection(), Some(Selection::Selected(2)));

        decision.execute(&mut world);
        world.valid = vec![false, false, false];
        decision.execute(&mut world);
        assert!(decision.is_complete());
        assert_eq!(decision.last_selection(), Some(Selection::NoValidCandidate));
    }

    #[test]
    fn empty_decision_is_immediately_complete() {
        let mut decision: DecisionState<World> = DecisionState::new("empty");
        let mut world = World::default();

        decision.enter(&mut world);
        assert!(decision.is_complete());
    }

    #[test]
    fn exit_propagates_to_unfinished_child() {
        let mut decision = three_way();
        let mut world = World {
            valid: vec![true, false, false],
            work: 5,
            ..World::default()
        };

        decision.enter(&mut world);
        decision.execute(&mut world);
        decision.exit(&mut world);

        assert_eq!(world.log, vec!["enter C1", "exec C1", "exit C1"]);
        assert!(decision.active_child().is_none());
    }

    #[test]
    fn guard_controls_validity() {
        let decision: DecisionState<World> =
            DecisionState::new("guarded").when(|w: &World| w.work > 0);

        assert!(!decision.is_valid(&World::default()));
        assert!(decision.is_valid(&World {
            work: 1,
            ..World::default()
        }));
        assert!(DecisionState::<World>::new("open").is_valid(&World::default()));
    }

    #[test]
    fn add_sub_state_fails_after_entry() {
        let mut decision = three_way();
        assert!(decision.add_sub_state(Box::new(tracked(0))).is_ok());

        let mut world = World {
            valid: vec![false, false, false],
            ..World::default()
        };
        decision.enter(&mut world);

        let result = decision.add_sub_state(Box::new(tracked(1)));
        assert!(matches!(result, Err(BuildError::AlreadyRunning { name }) if name == "decide"));
        assert_eq!(decision.children().len(), 4);
    }

    #[test]
    fn attached_observer_sees_scan() {
        let recorder = Arc::new(RecordingObserver::new());
        let observer: SharedObserver = recorder.clone();
        let mut decision = three_way();
        decision.attach(&observer);

        let mut world = World {
            valid: vec![false, false, true],
            work: 1,
            ..World::default()
        };
        decision.enter(&mut world);

        assert_eq!(
            recorder.events(),
            vec![
                EngineEvent::Entered {
                    scope: "decide".to_string(),
                    state: "C3".to_string(),
                },
                EngineEvent::Selected {
                    scope: "decide".to_string(),
                    state: "C3".to_string(),
                    index: 2,
                },
            ]
        );
    }
}
