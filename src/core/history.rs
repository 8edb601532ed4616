//! State transition history tracking.
//!
//! The controller cycles forever, so history is bounded: only the most
//! recent transitions are retained.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions kept by [`CycleHistory::default`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Record of a single committed state transition.
///
/// # Example
///
/// ```rust
/// use signal_fsm::core::StateTransition;
/// use signal_fsm::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let transition = StateTransition {
///     from: Light::Red,
///     to: Light::Green,
///     timestamp: Utc::now(),
///     cycle: 1,
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
    /// Control cycle number that produced the transition
    pub cycle: u64,
}

/// Ordered, bounded history of committed transitions.
///
/// Holds are not transitions and are never recorded.
///
/// # Example
///
/// ```rust
/// use signal_fsm::core::{CycleHistory, StateTransition};
/// use signal_fsm::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Step {
///         A,
///         B,
///         C,
///     }
/// }
///
/// let mut history = CycleHistory::with_capacity(2);
/// for (cycle, (from, to)) in [(Step::A, Step::B), (Step::B, Step::C), (Step::C, Step::A)]
///     .into_iter()
///     .enumerate()
/// {
///     history.record(StateTransition { from, to, timestamp: Utc::now(), cycle: cycle as u64 });
/// }
///
/// // Oldest entry was evicted.
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![&Step::B, &Step::C, &Step::A]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CycleHistory<S: State> {
    capacity: usize,
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: State> Default for CycleHistory<S> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<S: State> CycleHistory<S> {
    /// Create an empty history retaining at most `capacity` transitions.
    ///
    /// A capacity of zero records nothing. Storage grows on demand, so
    /// an oversized capacity costs nothing up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.capacity == 0 {
            return;
        }
        while self.transitions.len() >= self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
