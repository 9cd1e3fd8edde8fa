//! Cardinal headings and the rotation algebra over them.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cardinal directions the rover can face.
///
/// Each heading is a unit vector on the grid. Rotation cycles among these four only,
/// so no other heading is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    /// `(0, 1)`
    North,
    /// `(1, 0)`
    East,
    /// `(0, -1)`
    South,
    /// `(-1, 0)`
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Returns the unit vector this heading points along.
    pub fn vector(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// Resolves a vector back to a heading.
    ///
    /// Returns `None` for anything that is not one of the four cardinal unit vectors.
    pub fn from_vector(v: IVec2) -> Option<Heading> {
        Self::ALL.into_iter().find(|h| h.vector() == v)
    }

    /// Rotates by 90 degrees.
    ///
    /// Clockwise maps `(dx, dy)` to `(dy, -dx)`, counter-clockwise maps it to `(-dy, dx)`.
    pub fn rotate(self, clockwise: bool) -> Heading {
        match (self, clockwise) {
            (Heading::North, true) | (Heading::South, false) => Heading::East,
            (Heading::East, true) | (Heading::West, false) => Heading::South,
            (Heading::South, true) | (Heading::North, false) => Heading::West,
            (Heading::West, true) | (Heading::East, false) => Heading::North,
        }
    }

    /// Upper-case name used in the diagnostic rendering.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
