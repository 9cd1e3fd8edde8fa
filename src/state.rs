//! Rover state snapshots and the pure transitions between them.

use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable snapshot of the rover on the grid.
///
/// Every executed move or rotation produces a fresh snapshot that replaces the
/// previous one wholesale. `stopped` describes only the operation that produced
/// this snapshot; it is never carried over by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    /// Grid cell the rover occupies. The grid is unbounded.
    pub position: IVec2,

    /// Direction the rover faces.
    pub heading: Heading,

    /// Set when the last operation was blocked or the batch was aborted.
    pub stopped: bool,
}

impl RoverState {
    /// Creates a snapshot that is not stopped, as produced by landing.
    pub fn new(position: impl Into<IVec2>, heading: Heading) -> Self {
        Self {
            position: position.into(),
            heading,
            stopped: false,
        }
    }

    /// Column of the occupied cell.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Row of the occupied cell.
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Returns a copy with the `stopped` flag replaced.
    pub fn with_stopped(self, stopped: bool) -> Self {
        Self { stopped, ..self }
    }

    /// Computes the snapshot after one step along the current heading.
    ///
    /// `danger_probe` is asked about the candidate cell. If it reports danger the
    /// rover keeps its position and the result is stopped; otherwise the rover
    /// occupies the candidate cell. The heading never changes.
    ///
    /// A step off the edge of the `i32` grid has no representable cell and is
    /// treated as danger without consulting the probe.
    pub fn moved(&self, forward: bool, mut danger_probe: impl FnMut(i32, i32) -> bool) -> Self {
        let step = self.heading.vector();
        let candidate = if forward {
            self.position
                .x
                .checked_add(step.x)
                .zip(self.position.y.checked_add(step.y))
        } else {
            self.position
                .x
                .checked_sub(step.x)
                .zip(self.position.y.checked_sub(step.y))
        };

        match candidate {
            Some((x, y)) if !danger_probe(x, y) => Self {
                position: IVec2::new(x, y),
                heading: self.heading,
                stopped: false,
            },
            _ => Self {
                position: self.position,
                heading: self.heading,
                stopped: true,
            },
        }
    }

    /// Computes the snapshot after a 90 degree turn in place. Rotation never stops.
    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            position: self.position,
            heading: self.heading.rotate(clockwise),
            stopped: false,
        }
    }
}

impl fmt::Display for RoverState {
    /// Renders as `(x, y) HEADING`, with ` stopped` appended when stopped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.position.x, self.position.y, self.heading)?;
        if self.stopped {
            f.write_str(" stopped")?;
        }
        Ok(())
    }
}
