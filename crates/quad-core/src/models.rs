//! Core data models for the route planner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer coordinate on the planning grid.
pub type Coord = u32;

/// A validated point inside the planning area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Inclusive interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: Coord,
    pub max: Coord,
}

impl AxisRange {
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Rectangular planning area. Every point and transmitter must lie inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl Default for Area {
    fn default() -> Self {
        Self {
            x: AxisRange { min: 0, max: 100 },
            y: AxisRange { min: 0, max: 100 },
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis label used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// A radio transmitter with a circular coverage zone of radius `power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transmitter {
    pub x: Coord,
    pub y: Coord,
    pub power: Coord,
}

impl Transmitter {
    pub fn new(x: Coord, y: Coord, power: Coord) -> Self {
        Self { x, y, power }
    }

    /// Center of the coverage zone.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for Transmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.power)
    }
}

/// One feasible route: distinct transmitters, each overlapping the next.
pub type Path = Vec<Transmitter>;

/// Which endpoint of the route a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "starting"),
            Endpoint::End => write!(f, "ending"),
        }
    }
}
