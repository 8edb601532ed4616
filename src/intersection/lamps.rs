//! The intersection's lamp bank.

use crate::core::OutputVector;
use crate::engine::EngineError;
use serde::{Deserialize, Serialize};

/// Lamp codes in actuator index order.
pub const LAMP_NAMES: [&str; 11] = [
    "ER", "EY", "EG", "NR", "NY", "NG", "NA", "WR", "WY", "WG", "WA",
];

/// Lamp states for the eastbound, northbound and westbound signal heads.
///
/// East has red/yellow/green; north and west also carry a turn arrow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LampOutputs {
    pub east_red: bool,
    pub east_yellow: bool,
    pub east_green: bool,
    pub north_red: bool,
    pub north_yellow: bool,
    pub north_green: bool,
    pub north_arrow: bool,
    pub west_red: bool,
    pub west_yellow: bool,
    pub west_green: bool,
    pub west_arrow: bool,
}

impl LampOutputs {
    /// Every head showing red, arrows dark.
    pub fn all_red() -> Self {
        Self {
            east_red: true,
            north_red: true,
            west_red: true,
            ..Self::default()
        }
    }

    /// Build from a positional row in [`LAMP_NAMES`] order.
    ///
    /// `label` names the row in the error when its length is wrong.
    pub fn from_row(label: &str, row: &[bool]) -> Result<Self, EngineError> {
        let bits: [bool; 11] = row
            .try_into()
            .map_err(|_| EngineError::MalformedOutputVector {
                state: label.to_string(),
                expected: Self::WIDTH,
                found: row.len(),
            })?;
        Ok(Self::from_bits(bits))
    }

    pub(crate) fn from_bits(bits: [bool; 11]) -> Self {
        let [er, ey, eg, nr, ny, ng, na, wr, wy, wg, wa] = bits;
        Self {
            east_red: er,
            east_yellow: ey,
            east_green: eg,
            north_red: nr,
            north_yellow: ny,
            north_green: ng,
            north_arrow: na,
            west_red: wr,
            west_yellow: wy,
            west_green: wg,
            west_arrow: wa,
        }
    }

    /// Codes of the lamps that are lit, in index order.
    pub fn lit(&self) -> Vec<&'static str> {
        self.bits()
            .into_iter()
            .zip(LAMP_NAMES)
            .filter_map(|(on, name)| on.then_some(name))
            .collect()
    }
}

impl OutputVector for LampOutputs {
    const WIDTH: usize = 11;

    fn bits(&self) -> Vec<bool> {
        vec![
            self.east_red,
            self.east_yellow,
            self.east_green,
            self.north_red,
            self.north_yellow,
            self.north_green,
            self.north_arrow,
            self.west_red,
            self.west_yellow,
            self.west_green,
            self.west_arrow,
        ]
    }
}
