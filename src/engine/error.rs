//! Runtime engine errors.

use thiserror::Error;

/// Which configuration table a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Transition,
    Output,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Transition => f.write_str("transition"),
            Table::Output => f.write_str("output"),
        }
    }
}

/// Errors that can occur while running a control cycle.
///
/// Both variants indicate a broken configuration. Absence of a
/// transition is normal control flow and never an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("State '{state}' has no entry in the {table} table")]
    UnknownState { state: String, table: Table },

    #[error("Output vector for '{state}' has {found} positions, actuator expects {expected}")]
    MalformedOutputVector {
        state: String,
        expected: usize,
        found: usize,
    },
}
