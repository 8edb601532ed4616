//! Table-driven state machine engine.

use crate::core::{OutputVector, State, TransitionRule};
use crate::engine::error::{EngineError, Table};
use log::{debug, error};
use std::collections::HashMap;

/// Finite state machine holding the current state and its two tables.
///
/// The current state is the only mutable field. A control cycle is
/// `compute_next_state` → `advance` → `current_outputs`, in that order.
/// Computing never mutates, so a caller can inspect or veto a decision
/// before committing it with `advance`.
pub struct Engine<S: State, I, O: OutputVector> {
    current: S,
    transitions: HashMap<S, TransitionRule<S, I>>,
    outputs: HashMap<S, O>,
}

impl<S: State, I, O: OutputVector> Engine<S, I, O> {
    /// Create an engine in the initial state with empty tables.
    ///
    /// No totality check happens here; use
    /// [`EngineBuilder`](crate::builder::EngineBuilder) for validated
    /// construction.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            transitions: HashMap::new(),
            outputs: HashMap::new(),
        }
    }

    /// Set the transition rule for a state, replacing any previous rule.
    pub fn insert_rule(&mut self, state: S, rule: TransitionRule<S, I>) {
        self.transitions.insert(state, rule);
    }

    /// Set the output vector for a state, replacing any previous vector.
    pub fn insert_output(&mut self, state: S, output: O) {
        self.outputs.insert(state, output);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> S {
        self.current
    }

    /// Rule registered for `state`, if any.
    pub fn rule(&self, state: S) -> Option<&TransitionRule<S, I>> {
        self.transitions.get(&state)
    }

    /// Output vector registered for `state`, if any.
    pub fn output(&self, state: S) -> Option<&O> {
        self.outputs.get(&state)
    }

    /// Decide the next state for this cycle without committing it.
    ///
    /// Returns `Ok(None)` when the rule holds the current state.
    pub fn compute_next_state(&self, input: &I) -> Result<Option<S>, EngineError> {
        let Some(rule) = self.transitions.get(&self.current) else {
            error!("no transition rule for state {}", self.current.name());
            return Err(EngineError::UnknownState {
                state: self.current.name().to_string(),
                table: Table::Transition,
            });
        };

        let next = rule.evaluate(input);
        match next {
            Some(target) => debug!("{} -> {}", self.current.name(), target.name()),
            None => debug!("{} holds", self.current.name()),
        }
        Ok(next)
    }

    /// Commit a decision from `compute_next_state`.
    ///
    /// `None` leaves the current state unchanged.
    pub fn advance(&mut self, next: Option<S>) {
        if let Some(state) = next {
            self.current = state;
        }
    }

    /// Lamp configuration for the current state.
    pub fn current_outputs(&self) -> Result<&O, EngineError> {
        self.outputs_for(self.current)
    }

    /// Lamp configuration for `state`, failing like `current_outputs`
    /// would once the engine is in that state.
    pub fn outputs_for(&self, state: S) -> Result<&O, EngineError> {
        self.outputs.get(&state).ok_or_else(|| {
            error!("no output vector for state {}", state.name());
            EngineError::UnknownState {
                state: state.name().to_string(),
                table: Table::Output,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Branch, Guard};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Phase {
        Green,
        Yellow,
        Red,
    }

    impl State for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Green => "Green",
                Self::Yellow => "Yellow",
                Self::Red => "Red",
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Green, Self::Yellow, Self::Red]
        }
    }

    #[derive(Clone, Copy, Default)]
    struct Inputs {
        cross_traffic: bool,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Lamp {
        on: bool,
    }

    impl OutputVector for Lamp {
        const WIDTH: usize = 1;

        fn bits(&self) -> Vec<bool> {
            vec![self.on]
        }
    }

    fn engine() -> Engine<Phase, Inputs, Lamp> {
        let mut engine = Engine::new(Phase::Green);
        engine.insert_rule(
            Phase::Green,
            TransitionRule::Conditional(vec![Branch {
                guard: Guard::new(|i: &Inputs| i.cross_traffic),
                target: Phase::Yellow,
            }]),
        );
        engine.insert_rule(Phase::Yellow, TransitionRule::Unconditional(Phase::Red));
        engine.insert_rule(Phase::Red, TransitionRule::Unconditional(Phase::Green));
        engine.insert_output(Phase::Green, Lamp { on: true });
        engine.insert_output(Phase::Yellow, Lamp { on: true });
        engine.insert_output(Phase::Red, Lamp { on: false });
        engine
    }

    #[test]
    fn compute_does_not_mutate() {
        let engine = engine();
        let next = engine
            .compute_next_state(&Inputs {
                cross_traffic: true,
            })
            .unwrap();

        assert_eq!(next, Some(Phase::Yellow));
        assert_eq!(engine.current_state(), Phase::Green);
    }

    #[test]
    fn advance_none_holds_state() {
        let mut engine = engine();
        let next = engine.compute_next_state(&Inputs::default()).unwrap();
        assert_eq!(next, None);

        engine.advance(next);
        assert_eq!(engine.current_state(), Phase::Green);
    }

    #[test]
    fn advance_some_replaces_state() {
        let mut engine = engine();
        engine.advance(Some(Phase::Red));
        assert_eq!(engine.current_state(), Phase::Red);
    }

    #[test]
    fn compute_then_advance_walks_the_cycle() {
        let mut engine = engine();
        let busy = Inputs {
            cross_traffic: true,
        };

        for expected in [Phase::Yellow, Phase::Red, Phase::Green] {
            let next = engine.compute_next_state(&busy).unwrap();
            engine.advance(next);
            assert_eq!(engine.current_state(), expected);
        }
    }

    #[test]
    fn current_outputs_reads_table() {
        let mut engine = engine();
        assert_eq!(engine.current_outputs().unwrap(), &Lamp { on: true });

        engine.advance(Some(Phase::Red));
        assert_eq!(engine.current_outputs().unwrap(), &Lamp { on: false });
    }

    #[test]
    fn missing_rule_reports_unknown_state() {
        let engine: Engine<Phase, Inputs, Lamp> = Engine::new(Phase::Yellow);

        let err = engine.compute_next_state(&Inputs::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownState {
                state: "Yellow".to_string(),
                table: Table::Transition,
            }
        );
    }

    #[test]
    fn missing_output_reports_unknown_state() {
        let mut engine: Engine<Phase, Inputs, Lamp> = Engine::new(Phase::Red);
        engine.insert_rule(Phase::Red, TransitionRule::Unconditional(Phase::Red));

        let err = engine.current_outputs().unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnknownState {
                table: Table::Output,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "State 'Red' has no entry in the output table"
        );
    }

    #[test]
    fn outputs_for_looks_up_any_state() {
        let mut engine: Engine<Phase, Inputs, Lamp> = Engine::new(Phase::Green);
        engine.insert_output(Phase::Green, Lamp { on: true });

        assert_eq!(engine.outputs_for(Phase::Green).unwrap(), &Lamp { on: true });
        assert_eq!(
            engine.outputs_for(Phase::Yellow).unwrap_err(),
            EngineError::UnknownState {
                state: "Yellow".to_string(),
                table: Table::Output,
            }
        );
        assert_eq!(engine.current_state(), Phase::Green);
    }
}
