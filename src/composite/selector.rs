//! First-valid-wins selection shared by `DecisionState` and `StateMachine`.

use super::{Preemption, Selection, Tick};
use crate::core::State;
use crate::observer::{EngineEvent, SharedObserver};

/// Ordered candidate list with at most one active child.
///
/// Insertion order is priority order. `active` is always a valid index into
/// `children` when set: it is only assigned from an enumerate over the list,
/// and the list never shrinks.
pub struct PrioritySelector<C> {
    children: Vec<Box<dyn State<C>>>,
    active: Option<usize>,
    preemption: Preemption,
}

impl<C> PrioritySelector<C> {
    pub fn new(preemption: Preemption) -> Self {
        Self {
            children: Vec::new(),
            active: None,
            preemption,
        }
    }

    pub fn push(&mut self, child: Box<dyn State<C>>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn State<C>>] {
        &self.children
    }

    pub fn preemption(&self) -> Preemption {
        self.preemption
    }

    pub fn set_preemption(&mut self, preemption: Preemption) {
        self.preemption = preemption;
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&dyn State<C>> {
        self.active
            .and_then(|i| self.children.get(i))
            .map(|c| c.as_ref())
    }

    pub fn attach(&mut self, observer: &SharedObserver) {
        for child in &mut self.children {
            child.attach(observer);
        }
    }

    /// Scan children in priority order and enter the first valid one.
    ///
    /// Clears the active child first; the caller is responsible for having
    /// exited it.
    pub fn scan(&mut self, ctx: &mut C, scope: &str, observer: &SharedObserver) -> Selection {
        self.select(ctx, scope, observer, true)
    }

    /// Advance by one tick.
    ///
    /// Delegates to the active child while it is incomplete. Once it reports
    /// complete (or when nothing is active), exits it and re-scans from the
    /// highest priority. `NoValidCandidate` is reported only when a child was
    /// active before the re-scan.
    pub fn step(&mut self, ctx: &mut C, scope: &str, observer: &SharedObserver) -> Tick {
        match self.active {
            Some(index) if !self.children[index].is_complete() => {
                if self.preemption == Preemption::Preemptive {
                    if let Some(winner) = self.first_valid(ctx, index) {
                        self.exit_active(ctx, scope, observer);
                        self.activate(winner, ctx, scope, observer);
                        observer.on_event(&EngineEvent::Preempted {
                            scope: scope.to_string(),
                            preempted: self.children[index].name().to_string(),
                            by: self.children[winner].name().to_string(),
                        });
                        return Tick::Preempted {
                            from: index,
                            to: winner,
                        };
                    }
                }
                self.children[index].execute(ctx);
                Tick::Executed(index)
            }
            previous => {
                self.exit_active(ctx, scope, observer);
                match self.select(ctx, scope, observer, previous.is_some()) {
                    Selection::Selected(to) => Tick::Transitioned { from: previous, to },
                    Selection::NoValidCandidate => Tick::Exhausted { from: previous },
                }
            }
        }
    }

    /// Exit the active child, if any, and clear it.
    pub fn exit_active(&mut self, ctx: &mut C, scope: &str, observer: &SharedObserver) {
        if let Some(index) = self.active.take() {
            let child = &mut self.children[index];
            child.exit(ctx);
            observer.on_event(&EngineEvent::Exited {
                scope: scope.to_string(),
                state: child.name().to_string(),
            });
        }
    }

    // An idle level that is still idle after re-scanning reports nothing, so
    // a stopped machine ticked by its host stays quiet.
    fn select(
        &mut self,
        ctx: &mut C,
        scope: &str,
        observer: &SharedObserver,
        report_empty: bool,
    ) -> Selection {
        self.active = None;

        let Some(index) = self.first_valid(ctx, self.children.len()) else {
            if report_empty {
                observer.on_event(&EngineEvent::NoValidCandidate {
                    scope: scope.to_string(),
                });
            }
            return Selection::NoValidCandidate;
        };

        self.activate(index, ctx, scope, observer);
        observer.on_event(&EngineEvent::Selected {
            scope: scope.to_string(),
            state: self.children[index].name().to_string(),
            index,
        });
        Selection::Selected(index)
    }

    fn first_valid(&self, ctx: &C, before: usize) -> Option<usize> {
        self.children
            .iter()
            .take(before)
            .position(|child| child.is_valid(ctx))
    }

    fn activate(&mut self, index: usize, ctx: &mut C, scope: &str, observer: &SharedObserver) {
        let child = &mut self.children[index];
        observer.on_event(&EngineEvent::Entered {
            scope: scope.to_string(),
            state: child.name().to_string(),
        });
        child.enter(ctx);
        self.active = Some(index);
    }
}
