//! # mars-rover
//!
//! A grid rover that lands at a coordinate and heading, then executes strings of
//! single-character commands. Each character is bound (via [`RoverBuilder`]) to an
//! [`Operation`]: an atomic move or rotation, or a composite sequence of them.
//!
//! Moves are guarded by external [`Sensor`]s. When any sensor reports the target cell
//! unsafe the rover stays put and is marked *stopped*; composite operations abort their
//! remainder on the first stop, and an unrecognized command character aborts the whole batch.

pub mod builder;
pub mod error;
pub mod heading;
pub mod operation;
pub mod rover;
pub mod sensor;
pub mod state;

pub use builder::*;
pub use error::*;
pub use heading::*;
pub use operation::*;
pub use rover::*;
pub use sensor::*;
pub use state::*;
