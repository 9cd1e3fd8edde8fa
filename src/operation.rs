//! Operations that can be bound to command characters.

use crate::sensor::SensorArray;
use crate::state::RoverState;
use log::debug;
use serde::{Deserialize, Serialize};

/// A unit of rover behaviour.
///
/// Atomic variants replace the rover's state with exactly one new snapshot.
/// [`Operation::Compose`] runs a fixed sequence of children and halts as soon as
/// the rover is stopped, so a blocked move aborts the remainder of the composite.
/// Composites nest; the halt propagates through every level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Step one cell along the heading.
    MoveForward,
    /// Step one cell against the heading.
    MoveBackward,
    /// Turn 90 degrees counter-clockwise.
    RotateLeft,
    /// Turn 90 degrees clockwise.
    RotateRight,
    /// Run the children in order, halting once stopped.
    Compose(Vec<Operation>),
}

impl Operation {
    /// Applies this operation to `state`, probing `sensors` before each move.
    pub fn execute(&self, state: &mut RoverState, sensors: &SensorArray) {
        match self {
            Operation::MoveForward => Self::execute_move(state, sensors, true),
            Operation::MoveBackward => Self::execute_move(state, sensors, false),
            Operation::RotateLeft => *state = state.rotated(false),
            Operation::RotateRight => *state = state.rotated(true),
            Operation::Compose(ops) => {
                for op in ops {
                    if state.stopped {
                        break;
                    }
                    op.execute(state, sensors);
                }
            }
        }
    }

    fn execute_move(state: &mut RoverState, sensors: &SensorArray, forward: bool) {
        let next = state.moved(forward, |x, y| sensors.danger_exists(x, y));
        if next.stopped {
            debug!("move blocked, holding at {}", next);
        }
        *state = next;
    }
}

/// Shorthand for [`Operation::MoveForward`].
pub fn move_forward() -> Operation {
    Operation::MoveForward
}

/// Shorthand for [`Operation::MoveBackward`].
pub fn move_backward() -> Operation {
    Operation::MoveBackward
}

/// Shorthand for [`Operation::RotateLeft`].
pub fn rotate_left() -> Operation {
    Operation::RotateLeft
}

/// Shorthand for [`Operation::RotateRight`].
pub fn rotate_right() -> Operation {
    Operation::RotateRight
}

/// Builds a composite operation from `ops`, executed in the given order.
pub fn compose(ops: impl IntoIterator<Item = Operation>) -> Operation {
    Operation::Compose(ops.into_iter().collect())
}
