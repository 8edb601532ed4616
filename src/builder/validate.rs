//! Table validation that accumulates every violation.
//!
//! A broken configuration is reported in full, in one pass, using
//! Stillwater's accumulating `Validation`.

use crate::builder::error::ConfigViolation;
use crate::core::{OutputVector, State, TransitionRule};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn require(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check both tables against the full state enumeration.
///
/// Every state returned by `S::all()` must have a transition rule and an
/// output vector; conditional rules must have at least one branch; every
/// output vector must produce exactly `O::WIDTH` bits.
pub fn validate_tables<S, I, O>(
    transitions: &HashMap<S, TransitionRule<S, I>>,
    outputs: &HashMap<S, O>,
) -> Validation<(), NonEmptyVec<ConfigViolation>>
where
    S: State,
    O: OutputVector,
{
    let mut checks: Vec<Check> = Vec::new();

    for state in S::all() {
        let name = state.name();

        match transitions.get(state) {
            None => checks.push(Validation::fail(ConfigViolation::MissingTransition {
                state: name.to_string(),
            })),
            Some(rule) => checks.push(require(!rule.targets().is_empty(), || {
                ConfigViolation::EmptyRule {
                    state: name.to_string(),
                }
            })),
        }

        match outputs.get(state) {
            None => checks.push(Validation::fail(ConfigViolation::MissingOutput {
                state: name.to_string(),
            })),
            Some(output) => {
                let found = output.bits().len();
                checks.push(require(found == O::WIDTH, || {
                    ConfigViolation::MalformedOutputVector {
                        state: name.to_string(),
                        expected: O::WIDTH,
                        found,
                    }
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Collapse a validation into a plain list of violations.
pub fn into_result(
    validation: Validation<(), NonEmptyVec<ConfigViolation>>,
) -> Result<(), Vec<ConfigViolation>> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
