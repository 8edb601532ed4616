//! Output rendering: table lookup → bit vector → actuator commands.
//!
//! The renderer holds an injected [`Actuator`] capability rather than
//! global pin handles, so tests swap in a [`RecordingActuator`].

use crate::core::{OutputVector, State};
use crate::engine::{Engine, EngineError};
use log::{debug, info};

/// Physical lamp bank.
///
/// Index `i` always names the same lamp; the mapping is fixed when the
/// actuator is constructed.
pub trait Actuator {
    /// Number of lamps the actuator drives.
    fn width(&self) -> usize;

    /// Switch lamp `index` on or off.
    fn set(&mut self, index: usize, on: bool);
}

/// Drives an [`Actuator`] from output vectors.
pub struct OutputRenderer<A: Actuator> {
    actuator: A,
}

impl<A: Actuator> OutputRenderer<A> {
    /// Wrap an actuator for output vectors of type `O`.
    ///
    /// Fails with `MalformedOutputVector` when the actuator width does not
    /// match `O::WIDTH`, so a mismatched lamp bank is caught before the
    /// first cycle.
    pub fn new<O: OutputVector>(actuator: A) -> Result<Self, EngineError> {
        if actuator.width() != O::WIDTH {
            return Err(EngineError::MalformedOutputVector {
                state: "actuator".to_string(),
                expected: actuator.width(),
                found: O::WIDTH,
            });
        }
        Ok(Self { actuator })
    }

    /// Look up the engine's current outputs and apply them.
    pub fn render<S: State, I, O: OutputVector>(
        &mut self,
        engine: &Engine<S, I, O>,
    ) -> Result<O, EngineError> {
        let state = engine.current_state();
        let outputs = engine.current_outputs()?.clone();
        self.apply(state.name(), &outputs)?;
        Ok(outputs)
    }

    /// Write every position of `outputs` to the matching actuator index.
    ///
    /// `label` names the vector in errors and logs.
    pub fn apply<O: OutputVector>(&mut self, label: &str, outputs: &O) -> Result<(), EngineError> {
        let bits = outputs.bits();
        if bits.len() != self.actuator.width() {
            return Err(EngineError::MalformedOutputVector {
                state: label.to_string(),
                expected: self.actuator.width(),
                found: bits.len(),
            });
        }

        for (index, on) in bits.into_iter().enumerate() {
            self.actuator.set(index, on);
        }
        debug!("rendered {label}");
        Ok(())
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    pub fn into_inner(self) -> A {
        self.actuator
    }
}

/// Actuator double that records every command it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingActuator {
    lamps: Vec<bool>,
    commands: Vec<(usize, bool)>,
}

impl RecordingActuator {
    pub fn new(width: usize) -> Self {
        Self {
            lamps: vec![false; width],
            commands: Vec::new(),
        }
    }

    /// Current lamp levels.
    pub fn lamps(&self) -> &[bool] {
        &self.lamps
    }

    /// Every `set` call in order.
    pub fn commands(&self) -> &[(usize, bool)] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Actuator for RecordingActuator {
    fn width(&self) -> usize {
        self.lamps.len()
    }

    fn set(&mut self, index: usize, on: bool) {
        if let Some(lamp) = self.lamps.get_mut(index) {
            *lamp = on;
        }
        self.commands.push((index, on));
    }
}

/// Actuator that reports lamp states through the log facade.
///
/// Used by the simulator in place of GPIO pins.
#[derive(Clone, Debug)]
pub struct LogActuator {
    names: Vec<&'static str>,
    lamps: Vec<bool>,
}

impl LogActuator {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            lamps: vec![false; names.len()],
        }
    }

    /// Lamps currently on, by name.
    pub fn lit(&self) -> Vec<&'static str> {
        self.names
            .iter()
            .zip(&self.lamps)
            .filter(|(_, on)| **on)
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Actuator for LogActuator {
    fn width(&self) -> usize {
        self.names.len()
    }

    fn set(&mut self, index: usize, on: bool) {
        let Some(lamp) = self.lamps.get_mut(index) else {
            return;
        };
        if *lamp != on {
            info!(
                "lamp {} {}",
                self.names[index],
                if on { "on" } else { "off" }
            );
        }
        *lamp = on;
    }
}
