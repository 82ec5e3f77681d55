//! Ordered composite.

use crate::builder::BuildError;
use crate::core::{Completion, Guard, State};
use crate::observer::{noop, EngineEvent, SharedObserver};

/// Composite that runs its children strictly in insertion order.
///
/// Each child is entered, executed until it reports complete, and exited
/// before the next one is entered. Children's validity is not re-checked once
/// the sequence has started; only the sequence's own guard, evaluated by its
/// parent, decides whether it runs at all. An empty sequence completes as soon
/// as it is entered.
pub struct SequenceState<C> {
    name: String,
    children: Vec<Box<dyn State<C>>>,
    cursor: Option<usize>,
    done: Completion,
    guard: Option<Guard<C>>,
    observer: SharedObserver,
    started: bool,
}

impl<C> SequenceState<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            cursor: None,
            done: Completion::new(),
            guard: None,
            observer: noop(),
            started: false,
        }
    }

    /// Gate selection of this sequence on a predicate over the context.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Append a child while constructing the sequence.
    pub fn with_sub_state<S>(mut self, child: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.push(Box::new(child));
        self
    }

    /// Append a child. Insertion order is execution order.
    ///
    /// Fails once the sequence has been entered.
    pub fn add_sub_state(&mut self, child: Box<dyn State<C>>) -> Result<(), BuildError> {
        if self.started {
            return Err(BuildError::AlreadyRunning {
                name: self.name.clone(),
            });
        }
        self.push(child);
        Ok(())
    }

    /// Index of the child currently running, if any.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub(crate) fn push(&mut self, mut child: Box<dyn State<C>>) {
        child.attach(&self.observer);
        self.children.push(child);
    }

    fn enter_child(&mut self, index: usize, ctx: &mut C) {
        let child = &mut self.children[index];
        self.observer.on_event(&EngineEvent::Entered {
            scope: self.name.clone(),
            state: child.name().to_string(),
        });
        child.enter(ctx);
        self.cursor = Some(index);
    }

    fn exit_child(&mut self, ctx: &mut C) {
        if let Some(index) = self.cursor.take() {
            let child = &mut self.children[index];
            child.exit(ctx);
            self.observer.on_event(&EngineEvent::Exited {
                scope: self.name.clone(),
                state: child.name().to_string(),
            });
        }
    }

    fn finish(&mut self) {
        self.cursor = None;
        self.done.mark_complete();
        self.observer.on_event(&EngineEvent::SequenceCompleted {
            scope: self.name.clone(),
        });
    }
}

impl<C> State<C> for SequenceState<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, ctx: &mut C) {
        self.started = true;
        self.done.reset();
        if self.children.is_empty() {
            self.finish();
        } else {
            self.enter_child(0, ctx);
        }
    }

    fn execute(&mut self, ctx: &mut C) {
        let Some(index) = self.cursor else {
            return;
        };

        if !self.children[index].is_complete() {
            self.children[index].execute(ctx);
            return;
        }

        self.exit_child(ctx);
        let next = index + 1;
        if next < self.children.len() {
            self.observer.on_event(&EngineEvent::SequenceAdvanced {
                scope: self.name.clone(),
                index: next,
            });
            self.enter_child(next, ctx);
        } else {
            self.finish();
        }
    }

    fn exit(&mut self, ctx: &mut C) {
        self.exit_child(ctx);
    }

    fn is_complete(&self) -> bool {
        self.done.is_complete()
    }

    fn is_valid(&self, ctx: &C) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(ctx))
    }

    fn attach(&mut self, observer: &SharedObserver) {
        self.observer = observer.clone();
        for child in &mut self.children {
            child.attach(observer);
        }
    }

    fn active_child(&self) -> Option<&dyn State<C>> {
        self.cursor
            .and_then(|i| self.children.get(i))
            .map(|c| c.as_ref())
    }

    fn children(&self) -> &[Box<dyn State<C>>] {
        &self.children
    }
}
