//! Macros for ergonomic state tree construction.

/// Build a [`SequenceState`](crate::composite::SequenceState) from a name and
/// its children, in execution order.
///
/// # Example
///
/// ```
/// use strata::builder::action;
/// use strata::core::State;
/// use strata::sequence;
///
/// let patrol = sequence!("Patrol";
///     action("GoToA", |route: &mut Vec<u8>, done| { route.push(b'A'); done.mark_complete(); }),
///     action("GoToB", |route: &mut Vec<u8>, done| { route.push(b'B'); done.mark_complete(); }),
/// );
///
/// assert_eq!(patrol.name(), "Patrol");
/// assert_eq!(patrol.children().len(), 2);
/// ```
#[macro_export]
macro_rules! sequence {
    ($name:expr $(; $($child:expr),* $(,)?)?) => {
        $crate::composite::SequenceState::new($name)
            $($(.with_sub_state($child))*)?
    };
}

/// Build a [`DecisionState`](crate::composite::DecisionState) from a name and
/// its children, highest priority first.
///
/// # Example
///
/// ```
/// use strata::builder::action;
/// use strata::core::State;
/// use strata::decision;
///
/// let needs = decision!("Needs";
///     action("Eat", |hunger: &mut u32, done| { *hunger = 0; done.mark_complete(); })
///         .when(|hunger: &u32| *hunger > 5),
///     action("Idle", |_: &mut u32, done| done.mark_complete()),
/// );
///
/// assert_eq!(needs.children()[0].name(), "Eat");
/// ```
#[macro_export]
macro_rules! decision {
    ($name:expr $(; $($child:expr),* $(,)?)?) => {
        $crate::composite::DecisionState::new($name)
            $($(.with_sub_state($child))*)?
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::action;
    use crate::composite::{DecisionState, SequenceState};
    use crate::core::State;

    fn names(state: &dyn State<()>) -> Vec<&str> {
        state.children().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn sequence_macro_keeps_order() {
        let seq = sequence!("seq";
            action("one", |_: &mut (), d| d.mark_complete()),
            action("two", |_: &mut (), d| d.mark_complete()),
            action("three", |_: &mut (), d| d.mark_complete()),
        );

        assert_eq!(seq.name(), "seq");
        assert_eq!(names(&seq), vec!["one", "two", "three"]);
    }

    #[test]
    fn decision_macro_nests_sequences() {
        let dec = decision!("root";
            sequence!("inner"; action("leaf", |_: &mut (), d| d.mark_complete())),
            action("fallback", |_: &mut (), d| d.mark_complete())
        );

        assert_eq!(names(&dec), vec!["inner", "fallback"]);
        assert_eq!(names(dec.children()[0].as_ref()), vec!["leaf"]);
    }

    #[test]
    fn macros_accept_no_children() {
        let seq: SequenceState<()> = sequence!("empty");
        let dec: DecisionState<()> = decision!("empty");

        assert!(seq.children().is_empty());
        assert!(dec.children().is_empty());
    }
}
