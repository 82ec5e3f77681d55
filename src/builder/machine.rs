//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::validation::{lint_tree, validate_tree, violations, StructureCheck};
use crate::composite::Preemption;
use crate::core::State;
use crate::machine::{MachineConfig, StateMachine};
use crate::observer::SharedObserver;

/// Builder for constructing state machines with a fluent API.
///
/// `build()` validates the whole tree first and reports every structural
/// problem at once. Repeated sibling names are legal; [`validate`] reports
/// them as advisory findings.
///
/// [`validate`]: StateMachineBuilder::validate
pub struct StateMachineBuilder<C> {
    config: MachineConfig,
    observer: Option<SharedObserver>,
    states: Vec<Box<dyn State<C>>>,
}

impl<C> StateMachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: MachineConfig::default(),
            observer: None,
            states: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the machine's scope name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Choose top-level preemption.
    pub fn preemption(mut self, preemption: Preemption) -> Self {
        self.config.preemption = preemption;
        self
    }

    /// Report events to this observer instead of `tracing`.
    pub fn observer(mut self, observer: SharedObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Add a top-level state. Insertion order is priority order.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add several pre-boxed top-level states at once.
    pub fn states(mut self, states: Vec<Box<dyn State<C>>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Lint the structure without building, accumulating ALL violations.
    ///
    /// This is stricter than `build()`: it also flags sibling states that
    /// share a name, which makes events and active paths ambiguous.
    pub fn validate(&self) -> StructureCheck {
        lint_tree(&self.config.name, &self.states)
    }

    /// Build the state machine.
    /// Returns an error listing every violation if the structure is unsound.
    pub fn build(self) -> Result<StateMachine<C>, BuildError> {
        let found = violations(validate_tree(&self.config.name, &self.states));
        if !found.is_empty() {
            return Err(BuildError::InvalidStructure(found));
        }

        let mut machine = StateMachine::with_config(self.config);
        if let Some(observer) = self.observer {
            machine = machine.with_observer(observer);
        }
        for state in self.states {
            machine.push_state(state);
        }

        Ok(machine)
    }
}

impl<C> Default for StateMachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::action;
    use crate::builder::error::Violation;
    use crate::observer::{EngineEvent, RecordingObserver};
    use std::sync::Arc;

    fn done_leaf(name: &'static str) -> impl State<()> {
        action(name, |_: &mut (), done| done.mark_complete())
    }

    #[test]
    fn builder_requires_states() {
        let result = StateMachineBuilder::<()>::new().name("empty").build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidStructure(v))
                if v == vec![Violation::NoStates { machine: "empty".to_string() }]
        ));
    }

    #[test]
    fn duplicates_are_linted_but_still_build() {
        let builder = StateMachineBuilder::new()
            .state(done_leaf("a"))
            .state(done_leaf("a"))
            .state(done_leaf("b"))
            .state(done_leaf("b"));

        let found = violations(builder.validate());
        assert_eq!(found.len(), 2);
        assert!(found
            .iter()
            .all(|v| matches!(v, Violation::DuplicateName { .. })));

        let machine = builder.build().unwrap();
        assert_eq!(machine.states().len(), 4);
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .name("bot")
            .preemption(Preemption::Preemptive)
            .state(done_leaf("a"))
            .states(vec![Box::new(done_leaf("b")) as Box<dyn State<()>>])
            .build()
            .unwrap();

        assert_eq!(machine.states().len(), 2);
        assert_eq!(machine.config().name, "bot");
        assert_eq!(machine.config().preemption, Preemption::Preemptive);
        assert!(!machine.is_started());
    }

    #[test]
    fn builder_attaches_observer() {
        let recorder = Arc::new(RecordingObserver::new());
        let mut machine = StateMachineBuilder::new()
            .name("bot")
            .observer(recorder.clone())
            .state(done_leaf("a"))
            .build()
            .unwrap();

        let _ = machine.start(&mut ()).unwrap();

        assert_eq!(
            recorder.events().last(),
            Some(&EngineEvent::Started {
                scope: "bot".to_string()
            })
        );
    }
}
