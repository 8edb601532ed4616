//! The engine layer: the one piece of mutable state in the controller.
//!
//! The engine owns the current state and the transition/output tables.
//! It performs table lookups and rule evaluation; it never touches
//! hardware. Rendering and clocking live in [`crate::render`] and
//! [`crate::driver`].

mod error;
mod machine;

pub use error::{EngineError, Table};
pub use machine::Engine;
