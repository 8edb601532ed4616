//! Reference configuration: a three-approach intersection.
//!
//! Eight phases cycle forever. Two of them are branch points whose
//! successor depends on which sensors see traffic; every other phase is a
//! one-cycle dwell with a fixed successor.
//!
//! ```text
//! S0 ──NL──► S4 ──► S5 ──WL──► S7 ──► S2
//! │                 │
//! NR|WL             WS|ES
//! ▼                 ▼
//! S1 ──► S2 ──► S3 ──► S0       S6 ──► S0
//! ```

mod lamps;
mod sensors;

pub use lamps::{LampOutputs, LAMP_NAMES};
pub use sensors::{Direction, SensorSnapshot};

use crate::builder::{BuildError, EngineBuilder, RuleBuilder};
use crate::engine::Engine;

crate::state_enum! {
    /// Intersection phases.
    pub enum Phase {
        /// East green, north red, west green
        S0,
        /// East yellow, north red, west green
        S1,
        /// East red, north red with arrow, west green with arrow
        S2,
        /// East red, north red, west green
        S3,
        /// East yellow, north red, west yellow
        S4,
        /// East red, north green with arrow, west red
        S5,
        /// East red, north yellow, west red
        S6,
        /// East red, north yellow with arrow, west red
        S7,
    }
}

impl Phase {
    /// Whether the car at the head of a queue in `direction` may proceed.
    pub fn permits(self, direction: Direction) -> bool {
        use Direction::*;

        match self {
            Phase::S0 => matches!(direction, EastStraight | WestStraight),
            Phase::S2 => matches!(direction, NorthLeft | WestLeft | WestStraight),
            Phase::S3 => matches!(direction, WestStraight),
            Phase::S5 => matches!(direction, NorthLeft | NorthRight),
            _ => false,
        }
    }
}

pub type IntersectionEngine = Engine<Phase, SensorSnapshot, LampOutputs>;
pub type IntersectionBuilder = EngineBuilder<Phase, SensorSnapshot, LampOutputs>;

fn lamps(row: [u8; 11]) -> LampOutputs {
    LampOutputs::from_bits(row.map(|bit| bit != 0))
}

/// The lamp table, one row per phase.
pub fn reference_outputs() -> Vec<(Phase, LampOutputs)> {
    vec![
        //                  ER EY EG NR NY NG NA WR WY WG WA
        (Phase::S0, lamps([0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0])),
        (Phase::S1, lamps([0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0])),
        (Phase::S2, lamps([1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1])),
        (Phase::S3, lamps([1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0])),
        (Phase::S4, lamps([0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0])),
        (Phase::S5, lamps([1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0])),
        (Phase::S6, lamps([1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0])),
        (Phase::S7, lamps([1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0])),
    ]
}

/// Builder preloaded with the reference transition table, without outputs
/// or an initial state.
pub fn reference_rules() -> Result<IntersectionBuilder, BuildError> {
    Ok(EngineBuilder::new()
        .conditional(
            Phase::S0,
            RuleBuilder::new()
                .when_named("north_left", Phase::S4, |s: &SensorSnapshot| s.north_left)
                .when_named("north_right|west_left", Phase::S1, |s: &SensorSnapshot| {
                    s.north_right || s.west_left
                }),
        )?
        .unconditional(Phase::S1, Phase::S2)
        .unconditional(Phase::S2, Phase::S3)
        .unconditional(Phase::S3, Phase::S0)
        .unconditional(Phase::S4, Phase::S5)
        .conditional(
            Phase::S5,
            RuleBuilder::new()
                .when_named("west_left", Phase::S7, |s: &SensorSnapshot| s.west_left)
                .when_named("west_straight|east_straight", Phase::S6, |s: &SensorSnapshot| {
                    s.west_straight || s.east_straight
                }),
        )?
        .unconditional(Phase::S6, Phase::S0)
        .unconditional(Phase::S7, Phase::S2))
}

/// Builder for the full reference configuration starting in `S0`.
pub fn reference_builder() -> Result<IntersectionBuilder, BuildError> {
    Ok(reference_rules()?
        .initial(Phase::S0)
        .outputs(reference_outputs()))
}

/// The reference engine, validated.
pub fn reference_engine() -> Result<IntersectionEngine, BuildError> {
    reference_builder()?.build()
}
