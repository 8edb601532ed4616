//! Build errors for engines and transition rules.

use thiserror::Error;

/// A single problem found while validating configuration tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigViolation {
    #[error("State '{state}' has no transition rule")]
    MissingTransition { state: String },

    #[error("State '{state}' has no output vector")]
    MissingOutput { state: String },

    #[error("State '{state}' has a conditional rule with no branches")]
    EmptyRule { state: String },

    #[error("Output vector for '{state}' has {found} positions, expected {expected}")]
    MalformedOutputVector {
        state: String,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur when building engines and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Conditional rule has no branches. Call .when(target, predicate) before .build()")]
    EmptyRule,

    #[error("Configuration has {} violation(s): {}", .violations.len(), summarize(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
