//! Builder for constructing validated engines.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::builder::validate::{into_result, validate_tables};
use crate::core::{OutputVector, State, TransitionRule};
use crate::engine::Engine;
use std::collections::HashMap;

/// Builder for constructing engines with a fluent API.
///
/// `build()` refuses any configuration that is not total over
/// `S::all()`, so an engine produced here never reports
/// `UnknownState`.
pub struct EngineBuilder<S: State, I, O: OutputVector> {
    initial: Option<S>,
    transitions: HashMap<S, TransitionRule<S, I>>,
    outputs: HashMap<S, O>,
}

impl<S: State, I, O: OutputVector> EngineBuilder<S, I, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: HashMap::new(),
            outputs: HashMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set a pre-built rule for `state`.
    pub fn rule(mut self, state: S, rule: TransitionRule<S, I>) -> Self {
        self.transitions.insert(state, rule);
        self
    }

    /// Add a fixed one-cycle dwell: `from` always moves to `to`.
    pub fn unconditional(self, from: S, to: S) -> Self {
        self.rule(from, TransitionRule::Unconditional(to))
    }

    /// Add a conditional rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn conditional(self, from: S, builder: RuleBuilder<S, I>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        Ok(self.rule(from, rule))
    }

    /// Set the output vector for `state`.
    pub fn output(mut self, state: S, output: O) -> Self {
        self.outputs.insert(state, output);
        self
    }

    /// Add several output vectors at once.
    pub fn outputs(mut self, outputs: impl IntoIterator<Item = (S, O)>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    /// Build the engine.
    /// Returns an error if the initial state is missing or the tables are
    /// not total; every table violation is reported together.
    pub fn build(self) -> Result<Engine<S, I, O>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        into_result(validate_tables(&self.transitions, &self.outputs))
            .map_err(|violations| BuildError::Invalid { violations })?;

        let mut engine = Engine::new(initial);
        for (state, rule) in self.transitions {
            engine.insert_rule(state, rule);
        }
        for (state, output) in self.outputs {
            engine.insert_output(state, output);
        }

        Ok(engine)
    }
}

impl<S: State, I, O: OutputVector> Default for EngineBuilder<S, I, O> {
    fn default() -> Self {
        Self::new()
    }
}
