use thiserror::Error;

/// Errors returned by [`Rover`](crate::Rover).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoverError {
    /// Commands were issued before the rover was landed.
    #[error("RoverNotLanded")]
    NotLanded,
}
