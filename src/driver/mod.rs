//! Cycle driving: clock edge detection and the compute → advance →
//! render sequence.
//!
//! The engine has no notion of time. Everything here decides *when* a
//! cycle runs; [`crate::engine`] decides *what* it does.

mod controller;
mod edge;

pub use controller::{Controller, CycleReport, SharedController};
pub use edge::FallingEdgeDetector;
