//! Structural validation of state trees using `Validation`.
//!
//! Every check runs and ALL violations are reported together, so a host can
//! fix a broken tree in one pass instead of one error at a time.
//!
//! Two levels exist. [`validate_tree`] holds the rules a machine cannot run
//! without and gates `StateMachineBuilder::build`. [`lint_tree`] adds
//! advisory checks, such as repeated sibling names, that only make
//! diagnostics ambiguous; trees that fail them still build and run.

use crate::builder::error::Violation;
use crate::core::State;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a structural check.
pub type StructureCheck = Validation<(), NonEmptyVec<Violation>>;

/// Check the rules a machine needs in order to run.
///
/// Returns `Validation::Success(())` if the structure is sound, or
/// `Validation::Failure` carrying every violation found.
pub fn validate_tree<C>(machine: &str, states: &[Box<dyn State<C>>]) -> StructureCheck {
    let mut checks: Vec<StructureCheck> = Vec::new();
    check_required(machine, states, &mut checks);
    Validation::all_vec(checks).map(|_| ())
}

/// Run [`validate_tree`] plus advisory checks over every subtree.
///
/// Sibling names are compared per scope at any depth. Several leaves of one
/// host type share a default name, so a repeated name is legal and only
/// reported here.
pub fn lint_tree<C>(machine: &str, states: &[Box<dyn State<C>>]) -> StructureCheck {
    let mut checks: Vec<StructureCheck> = Vec::new();
    check_required(machine, states, &mut checks);
    check_scope(machine, states, &mut checks);
    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a failed check into a plain list, preserving order.
pub fn violations(check: StructureCheck) -> Vec<Violation> {
    match check {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn check_required<C>(machine: &str, states: &[Box<dyn State<C>>], checks: &mut Vec<StructureCheck>) {
    if states.is_empty() {
        checks.push(Validation::fail(Violation::NoStates {
            machine: machine.to_string(),
        }));
    }
}

fn check_scope<C>(scope: &str, children: &[Box<dyn State<C>>], checks: &mut Vec<StructureCheck>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for child in children {
        let name = child.name();
        if !seen.insert(name) && reported.insert(name) {
            checks.push(Validation::fail(Violation::DuplicateName {
                scope: scope.to_string(),
                name: name.to_string(),
            }));
        }
    }

    for child in children {
        check_scope(child.name(), child.children(), checks);
    }
}
