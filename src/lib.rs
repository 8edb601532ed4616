//! Signal FSM: a fixed-cycle traffic signal controller
//!
//! The controller follows a "pure core, imperative shell" layout. The
//! transition and output tables are plain data evaluated by pure
//! functions; the only mutable state is the engine's current state, and
//! the only effects are lamp writes through an injected actuator.
//!
//! # Core Concepts
//!
//! - **State**: closed set of phases via the `State` trait
//! - **Rules**: per-phase `TransitionRule`s, unconditional or an ordered
//!   list of guarded branches where the first match wins
//! - **Outputs**: one fixed-width `OutputVector` per phase
//! - **Driver**: a falling-edge clock detector that runs exactly one
//!   compute → advance → render sequence per edge
//!
//! # Example
//!
//! ```rust
//! use signal_fsm::builder::{EngineBuilder, RuleBuilder};
//! use signal_fsm::core::OutputVector;
//! use signal_fsm::driver::{Controller, FallingEdgeDetector};
//! use signal_fsm::render::{OutputRenderer, RecordingActuator};
//! use signal_fsm::state_enum;
//!
//! state_enum! {
//!     enum Crossing {
//!         Traffic,
//!         Walk,
//!     }
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Lamps {
//!     green: bool,
//!     walk: bool,
//! }
//!
//! impl OutputVector for Lamps {
//!     const WIDTH: usize = 2;
//!
//!     fn bits(&self) -> Vec<bool> {
//!         vec![self.green, self.walk]
//!     }
//! }
//!
//! let engine = EngineBuilder::new()
//!     .initial(Crossing::Traffic)
//!     .conditional(
//!         Crossing::Traffic,
//!         RuleBuilder::new().when(Crossing::Walk, |button: &bool| *button),
//!     )?
//!     .unconditional(Crossing::Walk, Crossing::Traffic)
//!     .output(Crossing::Traffic, Lamps { green: true, walk: false })
//!     .output(Crossing::Walk, Lamps { green: false, walk: true })
//!     .build()?;
//!
//! let renderer = OutputRenderer::new::<Lamps>(RecordingActuator::new(2))?;
//! let mut controller = Controller::new(engine, renderer)
//!     .with_clock(FallingEdgeDetector::primed(false));
//!
//! let report = controller.poll(true, || true)?.expect("edge");
//! assert_eq!(report.to, Crossing::Walk);
//! assert_eq!(controller.actuator().lamps(), &[false, true]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod intersection;
pub mod render;
pub mod sim;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder, RuleBuilder};
pub use core::{Guard, OutputVector, State, TransitionRule};
pub use driver::{Controller, CycleReport, FallingEdgeDetector};
pub use engine::{Engine, EngineError};
