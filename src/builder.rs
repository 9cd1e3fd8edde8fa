//! Rover assembly: command alphabet, sensors and their serializable configuration.

use crate::operation::Operation;
use crate::rover::Rover;
use crate::sensor::{Sensor, SensorArray};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// A serializable command alphabet.
///
/// Maps command characters to the operations they trigger, e.g. in JSON:
///
/// ```json
/// { "commands": { "f": "MoveForward", "z": { "Compose": ["MoveForward", "RotateRight"] } } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverConfig {
    #[serde(default)]
    pub commands: BTreeMap<char, Operation>,
}

impl RoverConfig {
    /// A config with no commands bound.
    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }
}

impl Default for RoverConfig {
    /// The conventional alphabet: `f`/`b` move, `l`/`r` rotate.
    fn default() -> Self {
        let commands = [
            ('f', Operation::MoveForward),
            ('b', Operation::MoveBackward),
            ('l', Operation::RotateLeft),
            ('r', Operation::RotateRight),
        ];
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

/// Assembles a [`Rover`] from a command table and a list of sensors.
///
/// [`build`](Self::build) snapshots both collections, so the builder can keep being
/// extended without affecting rovers it already produced. Sensors themselves are
/// shared read-only between the builder and every rover built from it.
#[derive(Clone, Default)]
pub struct RoverBuilder {
    operations: HashMap<char, Operation>,
    sensors: SensorArray,
}

impl RoverBuilder {
    /// Creates a builder with no commands and no sensors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-programmed with every command in `config`.
    pub fn from_config(config: &RoverConfig) -> Self {
        config
            .commands
            .iter()
            .fold(Self::new(), |builder, (&key, op)| {
                builder.program_command(key, op.clone())
            })
    }

    /// Binds the conventional alphabet of [`RoverConfig::default`].
    ///
    /// Existing bindings for `f`, `b`, `l` and `r` are replaced.
    pub fn with_standard_commands(self) -> Self {
        RoverConfig::default()
            .commands
            .into_iter()
            .fold(self, |builder, (key, op)| builder.program_command(key, op))
    }

    /// Binds `key` to `op`, replacing any previous binding.
    pub fn program_command(mut self, key: char, op: Operation) -> Self {
        self.operations.insert(key, op);
        self
    }

    /// Mounts a sensor.
    pub fn add_sensor(self, sensor: impl Sensor + 'static) -> Self {
        self.add_shared_sensor(Rc::new(sensor))
    }

    /// Mounts a sensor that is already shared elsewhere.
    pub fn add_shared_sensor(mut self, sensor: Rc<dyn Sensor>) -> Self {
        self.sensors.push(sensor);
        self
    }

    /// Builds an unlanded rover from the current commands and sensors.
    pub fn build(&self) -> Rover {
        Rover::new(self.operations.clone(), self.sensors.clone())
    }
}
