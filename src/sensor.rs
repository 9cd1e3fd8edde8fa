//! Terrain-safety sensors consulted before every move.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;

/// A safety oracle for grid cells.
///
/// How a sensor decides is opaque to the rover: static maps, dynamic hazards and
/// so on. Sensors are shared read-only once registered.
pub trait Sensor {
    /// Returns `true` if the rover may enter the cell at `(x, y)`.
    fn is_safe(&self, x: i32, y: i32) -> bool;
}

impl<F> Sensor for F
where
    F: Fn(i32, i32) -> bool,
{
    fn is_safe(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}

/// The full set of sensors mounted on a rover.
#[derive(Clone, Default)]
pub struct SensorArray {
    sensors: Vec<Rc<dyn Sensor>>,
}

impl SensorArray {
    /// Mounts another sensor.
    pub fn push(&mut self, sensor: Rc<dyn Sensor>) {
        self.sensors.push(sensor);
    }

    /// Number of mounted sensors.
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Returns `true` if no sensor is mounted.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Danger probe: `true` if any sensor reports `(x, y)` unsafe.
    ///
    /// An empty array never reports danger.
    pub fn danger_exists(&self, x: i32, y: i32) -> bool {
        self.sensors.iter().any(|s| !s.is_safe(x, y))
    }
}

/// A static map of blocked cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleMap {
    /// Cells every move into is refused.
    pub blocked: HashSet<IVec2>,
}

impl ObstacleMap {
    /// Creates a map with no blocked cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a blocked cell (builder pattern).
    pub fn with_obstacle(mut self, cell: impl Into<IVec2>) -> Self {
        self.blocked.insert(cell.into());
        self
    }
}

impl<C: Into<IVec2>> FromIterator<C> for ObstacleMap {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            blocked: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Sensor for ObstacleMap {
    fn is_safe(&self, x: i32, y: i32) -> bool {
        !self.blocked.contains(&IVec2::new(x, y))
    }
}
