//! The rover: current state, mounted sensors and the command table.
//!
//! Build one with [`RoverBuilder`](crate::RoverBuilder), place it with
//! [`Rover::land`], then drive it with [`Rover::execute`].

use crate::error::RoverError;
use crate::heading::Heading;
use crate::operation::Operation;
use crate::sensor::SensorArray;
use crate::state::RoverState;
use glam::IVec2;
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;

/// A programmable rover on an unbounded grid.
///
/// The command table and sensors are fixed at construction. The state is `None`
/// until the rover lands, and is replaced by a new snapshot on every operation.
pub struct Rover {
    operations: HashMap<char, Operation>,
    sensors: SensorArray,
    state: Option<RoverState>,
}

impl Rover {
    /// Creates an unlanded rover. Prefer [`RoverBuilder`](crate::RoverBuilder).
    pub fn new(operations: HashMap<char, Operation>, sensors: SensorArray) -> Self {
        Self {
            operations,
            sensors,
            state: None,
        }
    }

    /// Places the rover at `position` facing `heading`.
    ///
    /// Landing again simply overwrites the current state.
    pub fn land(&mut self, position: impl Into<IVec2>, heading: Heading) {
        let state = RoverState::new(position, heading);
        debug!("rover landed at {}", state);
        self.state = Some(state);
    }

    /// Executes `commands` left to right.
    ///
    /// The stopped flag is cleared first. Each character is looked up in the command
    /// table and its operation applied. An unbound character marks the rover stopped
    /// and abandons the rest of the batch. A stop caused by a blocked move does not
    /// end the batch; the next command runs against the stopped state.
    ///
    /// # Errors
    ///
    /// Returns [`RoverError::NotLanded`] without touching any state if the rover
    /// has never landed.
    pub fn execute(&mut self, commands: &str) -> Result<(), RoverError> {
        let Self {
            operations,
            sensors,
            state,
        } = self;
        let state = state.as_mut().ok_or(RoverError::NotLanded)?;

        *state = state.with_stopped(false);

        for key in commands.chars() {
            let Some(op) = operations.get(&key) else {
                debug!("unknown command {:?}, aborting batch at {}", key, state);
                *state = state.with_stopped(true);
                break;
            };
            trace!("command {:?} -> {:?}", key, op);
            op.execute(state, sensors);
        }

        Ok(())
    }

    /// Returns `true` if any mounted sensor reports `(x, y)` unsafe.
    pub fn danger_exists(&self, x: i32, y: i32) -> bool {
        self.sensors.danger_exists(x, y)
    }

    /// Current state, or `None` before landing.
    pub fn state(&self) -> Option<&RoverState> {
        self.state.as_ref()
    }

    /// Returns `true` once [`land`](Self::land) has been called.
    pub fn is_landed(&self) -> bool {
        self.state.is_some()
    }

    /// Looks up the operation bound to `key`.
    pub fn command(&self, key: char) -> Option<&Operation> {
        self.operations.get(&key)
    }

    /// Sensors mounted at construction.
    pub fn sensors(&self) -> &SensorArray {
        &self.sensors
    }
}

impl fmt::Display for Rover {
    /// Renders the current state as `(x, y) HEADING[ stopped]`.
    ///
    /// A rover that has not landed has no heading and renders as `unknown`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => fmt::Display::fmt(state, f),
            None => f.write_str("unknown"),
        }
    }
}

impl fmt::Debug for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rover")
            .field("operations", &self.operations)
            .field("sensors", &self.sensors.len())
            .field("state", &self.state)
            .finish()
    }
}
