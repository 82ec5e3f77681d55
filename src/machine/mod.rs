//! Top-level driver.
//!
//! The host calls [`StateMachine::start`] once and then [`StateMachine::update`]
//! once per tick. The machine applies the same first-valid-wins selection as
//! [`DecisionState`](crate::composite::DecisionState) to its top-level states,
//! and stops when a scan finds nothing valid.

mod config;
mod error;

pub use config::MachineConfig;
pub use error::MachineError;

use crate::composite::{PrioritySelector, Selection, Tick};
use crate::core::{State, StateHistory, StateTransition};
use crate::observer::{EngineEvent, SharedObserver, TracingObserver};
use chrono::Utc;
use std::sync::Arc;

/// Hierarchical state machine over a host context `C`.
///
/// # Example
///
/// ```rust
/// use strata::builder::action;
/// use strata::machine::StateMachine;
///
/// let mut machine: StateMachine<u32> = StateMachine::new();
/// machine
///     .add_state(Box::new(
///         action("CountToThree", |n: &mut u32, done| {
///             *n += 1;
///             if *n == 3 {
///                 done.mark_complete();
///             }
///         })
///         .when(|n: &u32| *n < 3),
///     ))
///     .unwrap();
///
/// let mut n = 0;
/// let _ = machine.start(&mut n).unwrap();
/// while machine.is_running() {
///     let _ = machine.update(&mut n).unwrap();
/// }
///
/// assert_eq!(n, 3);
/// ```
pub struct StateMachine<C> {
    config: MachineConfig,
    selector: PrioritySelector<C>,
    observer: SharedObserver,
    history: StateHistory,
    started: bool,
    ticks: u64,
}

impl<C> StateMachine<C> {
    /// Create an empty machine with default configuration.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create an empty machine reporting to a [`TracingObserver`].
    pub fn with_config(config: MachineConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        Self {
            selector: PrioritySelector::new(config.preemption),
            config,
            observer: Arc::new(TracingObserver),
            history,
            started: false,
            ticks: 0,
        }
    }

    /// Replace the observer for the machine and every state below it.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.selector.attach(&observer);
        self.observer = observer;
        self
    }

    /// Register a top-level candidate. Insertion order is priority order.
    ///
    /// Fails once the machine has started.
    pub fn add_state(&mut self, state: Box<dyn State<C>>) -> Result<(), MachineError> {
        if self.started {
            return Err(MachineError::AlreadyStarted);
        }
        self.push_state(state);
        Ok(())
    }

    pub(crate) fn push_state(&mut self, mut state: Box<dyn State<C>>) {
        state.attach(&self.observer);
        self.selector.push(state);
    }

    /// Enter the first valid top-level state.
    ///
    /// If nothing is valid the machine stays idle; [`update`](Self::update)
    /// keeps re-scanning on later ticks.
    pub fn start(&mut self, ctx: &mut C) -> Result<Selection, MachineError> {
        if self.started {
            return Err(MachineError::AlreadyStarted);
        }
        self.started = true;

        let selection = self.selector.scan(ctx, &self.config.name, &self.observer);
        if let Selection::Selected(index) = selection {
            self.observer.on_event(&EngineEvent::Started {
                scope: self.config.name.clone(),
            });
            self.record(None, Some(index));
        }
        Ok(selection)
    }

    /// Advance the machine by one tick.
    ///
    /// Executes the active top-level state while it is incomplete; otherwise
    /// exits it and re-scans. A scan that finds nothing leaves the machine
    /// stopped, and further updates are cheap no-op re-scans.
    pub fn update(&mut self, ctx: &mut C) -> Result<Tick, MachineError> {
        if !self.started {
            return Err(MachineError::NotStarted);
        }
        self.ticks += 1;

        let tick = self.selector.step(ctx, &self.config.name, &self.observer);
        match tick {
            Tick::Executed(_) => {}
            Tick::Transitioned { from: None, to } => {
                self.observer.on_event(&EngineEvent::Started {
                    scope: self.config.name.clone(),
                });
                self.record(None, Some(to));
            }
            Tick::Transitioned { from, to } => self.record(from, Some(to)),
            Tick::Preempted { from, to } => self.record(Some(from), Some(to)),
            Tick::Exhausted { from: Some(from) } => {
                self.observer.on_event(&EngineEvent::Stopped {
                    scope: self.config.name.clone(),
                });
                self.record(Some(from), None);
            }
            Tick::Exhausted { from: None } => {}
        }
        Ok(tick)
    }

    /// Tear down the active path and return to the not-started state.
    ///
    /// Every node on the active path receives `exit()`. Afterwards states can
    /// be added again and [`start`](Self::start) may be called again.
    pub fn stop(&mut self, ctx: &mut C) {
        if !self.started {
            return;
        }
        let from = self.selector.active_index();
        self.selector.exit_active(ctx, &self.config.name, &self.observer);
        self.started = false;

        if from.is_some() {
            self.observer.on_event(&EngineEvent::Stopped {
                scope: self.config.name.clone(),
            });
            self.record(from, None);
        }
    }

    /// True iff a top-level state is active.
    pub fn is_running(&self) -> bool {
        self.selector.active_index().is_some()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn active_state(&self) -> Option<&dyn State<C>> {
        self.selector.active()
    }

    /// Names along the active path, from the top-level state down to the
    /// live leaf.
    pub fn active_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut node = self.selector.active();
        while let Some(state) = node {
            path.push(state.name());
            node = state.active_child();
        }
        path
    }

    /// Registered top-level states, in priority order.
    pub fn states(&self) -> &[Box<dyn State<C>>] {
        self.selector.children()
    }

    /// Number of `update()` calls since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    fn record(&mut self, from: Option<usize>, to: Option<usize>) {
        if !self.config.record_history {
            return;
        }
        let name_of = |index: Option<usize>| {
            index
                .and_then(|i| self.selector.children().get(i))
                .map(|s| s.name().to_string())
        };
        let transition = StateTransition {
            from: name_of(from),
            to: name_of(to),
            tick: self.ticks,
            timestamp: Utc::now(),
        };
        self.history = std::mem::take(&mut self.history).record(transition);
    }
}

impl<C> Default for StateMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}
