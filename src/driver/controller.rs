//! The control cycle: compute → advance → render, once per clock edge.

use crate::core::{CycleHistory, OutputVector, State, StateTransition};
use crate::driver::edge::FallingEdgeDetector;
use crate::engine::{Engine, EngineError};
use crate::render::{Actuator, OutputRenderer};
use chrono::Utc;
use log::{debug, info};
use serde::Serialize;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Outcome of one control cycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CycleReport<S: State, O> {
    /// 1-based cycle number
    pub cycle: u64,
    pub from: S,
    pub to: S,
    /// True when the rule held the current state
    pub held: bool,
    /// Lamp configuration applied at the end of the cycle
    pub outputs: O,
}

/// Couples an engine to its renderer and clock.
///
/// Exactly one compute → advance → render sequence runs per detected
/// clock edge, and none otherwise.
pub struct Controller<S: State, I, O: OutputVector, A: Actuator> {
    engine: Engine<S, I, O>,
    renderer: OutputRenderer<A>,
    clock: FallingEdgeDetector,
    history: CycleHistory<S>,
    cycles: u64,
}

impl<S, I, O, A> Controller<S, I, O, A>
where
    S: State,
    I: Debug,
    O: OutputVector,
    A: Actuator,
{
    pub fn new(engine: Engine<S, I, O>, renderer: OutputRenderer<A>) -> Self {
        Self {
            engine,
            renderer,
            clock: FallingEdgeDetector::new(),
            history: CycleHistory::default(),
            cycles: 0,
        }
    }

    /// Retain at most `capacity` committed transitions.
    pub fn with_history(mut self, capacity: usize) -> Self {
        self.history = CycleHistory::with_capacity(capacity);
        self
    }

    /// Replace the clock edge detector.
    pub fn with_clock(mut self, clock: FallingEdgeDetector) -> Self {
        self.clock = clock;
        self
    }

    /// Light the lamps for the initial state without running a cycle.
    pub fn start(&mut self) -> Result<O, EngineError> {
        info!("starting in {}", self.engine.current_state().name());
        self.renderer.render(&self.engine)
    }

    /// Run one control cycle against `input`.
    ///
    /// The target state's output vector is checked before the state is
    /// committed. A failed cycle leaves the state, the lamps, the history
    /// and the cycle count untouched.
    pub fn cycle(&mut self, input: &I) -> Result<CycleReport<S, O>, EngineError> {
        let cycle = self.cycles + 1;
        let from = self.engine.current_state();
        debug!("cycle {} inputs {:?}", cycle, input);

        let next = self.engine.compute_next_state(input)?;
        let to = next.unwrap_or(from);
        let found = self.engine.outputs_for(to)?.bits().len();
        if found != O::WIDTH {
            return Err(EngineError::MalformedOutputVector {
                state: to.name().to_string(),
                expected: O::WIDTH,
                found,
            });
        }

        self.engine.advance(next);
        let outputs = self.renderer.render(&self.engine)?;
        self.cycles = cycle;

        let held = next.is_none();
        if !held {
            self.history.record(StateTransition {
                from,
                to,
                timestamp: Utc::now(),
                cycle,
            });
        }
        info!("cycle {}: {} -> {}", cycle, from.name(), to.name());

        Ok(CycleReport {
            cycle,
            from,
            to,
            held,
            outputs,
        })
    }

    /// Feed one clock sample.
    ///
    /// `snapshot` is only called, and a cycle only runs, when the sample
    /// completes a falling edge.
    pub fn poll<F>(
        &mut self,
        clock_level: bool,
        snapshot: F,
    ) -> Result<Option<CycleReport<S, O>>, EngineError>
    where
        F: FnOnce() -> I,
    {
        if !self.clock.sample(clock_level) {
            return Ok(None);
        }
        let input = snapshot();
        self.cycle(&input).map(Some)
    }

    pub fn engine(&self) -> &Engine<S, I, O> {
        &self.engine
    }

    pub fn current_state(&self) -> S {
        self.engine.current_state()
    }

    pub fn history(&self) -> &CycleHistory<S> {
        &self.history
    }

    /// Number of cycles run so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn actuator(&self) -> &A {
        self.renderer.actuator()
    }
}

/// Controller shared between threads.
///
/// The lock is held across the whole compute → advance → render
/// sequence, so a cycle is atomic with respect to every other caller.
pub struct SharedController<S: State, I, O: OutputVector, A: Actuator> {
    inner: Arc<Mutex<Controller<S, I, O, A>>>,
}

impl<S: State, I, O: OutputVector, A: Actuator> Clone for SharedController<S, I, O, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, I, O, A> SharedController<S, I, O, A>
where
    S: State,
    I: Debug,
    O: OutputVector,
    A: Actuator,
{
    pub fn new(controller: Controller<S, I, O, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn cycle(&self, input: &I) -> Result<CycleReport<S, O>, EngineError> {
        self.with(|controller| controller.cycle(input))
    }

    pub fn poll<F>(
        &self,
        clock_level: bool,
        snapshot: F,
    ) -> Result<Option<CycleReport<S, O>>, EngineError>
    where
        F: FnOnce() -> I,
    {
        self.with(|controller| controller.poll(clock_level, snapshot))
    }

    pub fn current_state(&self) -> S {
        self.with(|controller| controller.current_state())
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller<S, I, O, A>) -> R) -> R {
        // The state cell is a single Copy value, so a poisoned lock is still consistent.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
