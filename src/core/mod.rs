//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the controller:
//! - State definitions via the `State` trait
//! - Guard predicates and per-state transition rules
//! - The `OutputVector` lamp contract
//! - Bounded history tracking
//!
//! Nothing in this module touches hardware or owns mutable engine state.

mod guard;
mod history;
mod output;
mod rule;
mod state;

pub use guard::Guard;
pub use history::{CycleHistory, StateTransition, DEFAULT_HISTORY_CAPACITY};
pub use output::OutputVector;
pub use rule::{Branch, TransitionRule};
pub use state::State;
