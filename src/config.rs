//! TOML configuration for the simulator.
//!
//! Every field has a default, so an empty file (or no file at all)
//! reproduces the reference intersection.

use crate::builder::BuildError;
use crate::core::{State, DEFAULT_HISTORY_CAPACITY};
use crate::engine::EngineError;
use crate::intersection::{
    reference_outputs, reference_rules, IntersectionEngine, LampOutputs, Phase,
};
use crate::sim::{CarQueue, DEFAULT_DIRECTION_LIMIT, DEFAULT_QUEUE_CAPACITY};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown phase '{0}'")]
    UnknownState(String),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Malformed(#[from] EngineError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSection {
    /// Phase the controller powers up in
    pub initial_state: String,
    /// Committed transitions kept in history
    pub history: usize,
    /// Print each cycle report as a JSON line
    pub report_json: bool,
}

impl Default for ControllerSection {
    fn default() -> Self {
        Self {
            initial_state: Phase::S0.name().to_string(),
            history: DEFAULT_HISTORY_CAPACITY,
            report_json: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    pub queue_capacity: usize,
    pub direction_limit: usize,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            direction_limit: DEFAULT_DIRECTION_LIMIT,
        }
    }
}

/// Top-level configuration file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub controller: ControllerSection,
    pub simulation: SimulationSection,
    /// Lamp rows replacing the reference row for a phase, keyed by phase name
    pub outputs: BTreeMap<String, Vec<bool>>,
}

impl ControllerConfig {
    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn initial_phase(&self) -> Result<Phase, ConfigError> {
        parse_phase(&self.controller.initial_state)
    }

    /// Parse every override row without building an engine.
    pub fn output_overrides(&self) -> Result<Vec<(Phase, LampOutputs)>, ConfigError> {
        self.outputs
            .iter()
            .map(|(name, row)| {
                let phase = parse_phase(name)?;
                let lamps = LampOutputs::from_row(name, row)?;
                Ok((phase, lamps))
            })
            .collect()
    }

    /// The reference engine with this file's initial phase and lamp rows.
    pub fn build_engine(&self) -> Result<IntersectionEngine, ConfigError> {
        let engine = reference_rules()?
            .initial(self.initial_phase()?)
            .outputs(reference_outputs())
            .outputs(self.output_overrides()?)
            .build()?;
        Ok(engine)
    }

    pub fn build_queue(&self) -> CarQueue {
        CarQueue::with_limits(
            self.simulation.queue_capacity,
            self.simulation.direction_limit,
        )
    }
}

fn parse_phase(name: &str) -> Result<Phase, ConfigError> {
    Phase::from_name(name).ok_or_else(|| ConfigError::UnknownState(name.to_string()))
}
