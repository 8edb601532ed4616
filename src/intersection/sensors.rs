//! Vehicle-presence sensors and the per-cycle snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monitored approach lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    EastStraight,
    NorthLeft,
    NorthRight,
    WestStraight,
    WestLeft,
}

impl Direction {
    /// Every direction, in sensor channel order.
    pub const ALL: [Direction; 5] = [
        Direction::EastStraight,
        Direction::NorthLeft,
        Direction::NorthRight,
        Direction::WestStraight,
        Direction::WestLeft,
    ];

    /// Two-letter code used on the console and in simulator input.
    pub fn code(self) -> &'static str {
        match self {
            Direction::EastStraight => "ES",
            Direction::NorthLeft => "NL",
            Direction::NorthRight => "NR",
            Direction::WestStraight => "WS",
            Direction::WestLeft => "WL",
        }
    }

    /// Parse a two-letter code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
    }

    /// Position of this direction's channel in the sensor bank.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Sensor readings for one control cycle. `true` means a vehicle is present.
///
/// Snapshots are plain values: built once per cycle, read by the
/// transition rule, then dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub east_straight: bool,
    pub north_left: bool,
    pub north_right: bool,
    pub west_straight: bool,
    pub west_left: bool,
}

impl SensorSnapshot {
    /// Snapshot with no vehicle detected anywhere.
    pub fn clear() -> Self {
        Self::default()
    }

    /// Snapshot with a vehicle detected on every approach.
    pub fn all_detected() -> Self {
        Self {
            east_straight: true,
            north_left: true,
            north_right: true,
            west_straight: true,
            west_left: true,
        }
    }

    /// Build a snapshot from active-low pin levels in channel order.
    ///
    /// The sensor switches pull their line low when a vehicle is present.
    pub fn from_active_low(levels: [bool; 5]) -> Self {
        let [es, nl, nr, ws, wl] = levels;
        Self {
            east_straight: !es,
            north_left: !nl,
            north_right: !nr,
            west_straight: !ws,
            west_left: !wl,
        }
    }

    /// Snapshot with exactly the given directions detected.
    pub fn detecting(directions: &[Direction]) -> Self {
        directions
            .iter()
            .fold(Self::clear(), |snapshot, d| snapshot.with(*d, true))
    }

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::EastStraight => self.east_straight,
            Direction::NorthLeft => self.north_left,
            Direction::NorthRight => self.north_right,
            Direction::WestStraight => self.west_straight,
            Direction::WestLeft => self.west_left,
        }
    }

    /// Copy of this snapshot with one flag replaced.
    pub fn with(mut self, direction: Direction, detected: bool) -> Self {
        let flag = match direction {
            Direction::EastStraight => &mut self.east_straight,
            Direction::NorthLeft => &mut self.north_left,
            Direction::NorthRight => &mut self.north_right,
            Direction::WestStraight => &mut self.west_straight,
            Direction::WestLeft => &mut self.west_left,
        };
        *flag = detected;
        self
    }
}

impl fmt::Display for SensorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for direction in Direction::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}: {}", direction.code(), self.get(direction))?;
        }
        Ok(())
    }
}
