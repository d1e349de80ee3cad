//! Schema validation for machine assembly.
//!
//! Uses Stillwater's `Validation` so that every violation in the declared
//! schema is reported in one pass rather than stopping at the first.

use crate::actions::{ActionKind, Will};
use crate::builder::error::SchemaViolation;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<SchemaViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> SchemaViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn name<T: Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Validate declared states, declared events, and each state's composition.
///
/// `behaviors` pairs every declared state with its composition. Checks:
/// both sets are non-empty and free of duplicates, overrides only name
/// declared events and name each at most once, transition targets are
/// declared states, and no `OneOf` is empty.
pub(crate) fn validate<I, K>(
    states: &[I],
    events: &[K],
    behaviors: &[(I, Will<I, K>)],
) -> Result<(), Vec<SchemaViolation>>
where
    I: Copy + Eq + Hash + Debug,
    K: Copy + Eq + Hash + Debug,
{
    let mut checks: Vec<Check> = vec![
        check(!states.is_empty(), || SchemaViolation::NoStates),
        check(!events.is_empty(), || SchemaViolation::NoEvents),
    ];

    let mut seen_states = HashSet::new();
    for state in states {
        checks.push(check(seen_states.insert(*state), || {
            SchemaViolation::DuplicateState { state: name(state) }
        }));
    }

    let mut seen_events = HashSet::new();
    for event in events {
        checks.push(check(seen_events.insert(*event), || {
            SchemaViolation::DuplicateEvent { event: name(event) }
        }));
    }

    for (state, will) in behaviors {
        checks.extend(kind_checks(state, "*", will.default_action(), &seen_states));

        let mut overridden = HashSet::new();
        for on in will.overrides() {
            checks.push(check(seen_events.contains(&on.event), || {
                SchemaViolation::UndeclaredEvent {
                    state: name(state),
                    event: name(&on.event),
                }
            }));
            checks.push(check(overridden.insert(on.event), || {
                SchemaViolation::DuplicateOverride {
                    state: name(state),
                    event: name(&on.event),
                }
            }));
            checks.extend(kind_checks(state, &name(&on.event), &on.action, &seen_states));
        }
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

fn kind_checks<I>(
    state: &I,
    event: &str,
    kind: &ActionKind<I>,
    declared: &HashSet<I>,
) -> Vec<Check>
where
    I: Copy + Eq + Hash + Debug,
{
    let mut checks = vec![check(!kind.has_empty_choice(), || {
        SchemaViolation::EmptyChoice {
            state: name(state),
            event: event.to_string(),
        }
    })];
    kind.for_each_target(&mut |target| {
        checks.push(check(declared.contains(target), || {
            SchemaViolation::UnknownTarget {
                state: name(state),
                event: event.to_string(),
                target: name(target),
            }
        }));
    });
    checks
}
