//! Error taxonomy for planner operations.
//!
//! Every failure is recoverable: the operation that produced it leaves the
//! planner state untouched.

use crate::models::{Area, Axis, Endpoint, Transmitter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Coordinate must be an integer, got '{value}'")]
    InvalidCoordinateType { value: String },

    #[error("{axis}-Coordinate {value} is outside the route area {area}")]
    OutOfAreaBounds { axis: Axis, value: i64, area: Area },

    #[error("Invalid {axis} bounds [{min}, {max}]: {reason}")]
    InvalidAreaBounds {
        axis: Axis,
        min: i64,
        max: i64,
        reason: &'static str,
    },

    #[error("The power value of a transmitter should be a non-negative integer, got {power}")]
    InvalidPower { power: i64 },

    #[error("Transmitter with values {0} is among already added transmitters")]
    DuplicateTransmitter(Transmitter),

    #[error("Expected {expected} values, got {got}")]
    WrongValueCount { expected: usize, got: usize },

    #[error("You have to set both of starting and ending points")]
    MissingEndpoints,

    #[error("The {0} point is outside any of given transmitters range")]
    PointUncovered(Endpoint),

    #[error("There is NO safe route for the given start and end points within given transmitters")]
    NoRouteFound,
}

/// Payload-free reason tag, suitable for structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidCoordinateType,
    OutOfAreaBounds,
    InvalidAreaBounds,
    InvalidPower,
    DuplicateTransmitter,
    WrongValueCount,
    MissingEndpoints,
    PointUncovered,
    NoRouteFound,
}

impl RouteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteError::InvalidCoordinateType { .. } => ErrorKind::InvalidCoordinateType,
            RouteError::OutOfAreaBounds { .. } => ErrorKind::OutOfAreaBounds,
            RouteError::InvalidAreaBounds { .. } => ErrorKind::InvalidAreaBounds,
            RouteError::InvalidPower { .. } => ErrorKind::InvalidPower,
            RouteError::DuplicateTransmitter(_) => ErrorKind::DuplicateTransmitter,
            RouteError::WrongValueCount { .. } => ErrorKind::WrongValueCount,
            RouteError::MissingEndpoints => ErrorKind::MissingEndpoints,
            RouteError::PointUncovered(_) => ErrorKind::PointUncovered,
            RouteError::NoRouteFound => ErrorKind::NoRouteFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
