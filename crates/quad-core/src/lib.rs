//! Quadcopter route feasibility over overlapping transmitter coverage.
//!
//! A route exists when the start and end points are each covered by a
//! transmitter and those transmitters are linked by a chain of touching or
//! overlapping coverage zones.

pub mod coverage;
pub mod error;
pub mod geometry;
pub mod models;
pub mod registry;
pub mod route_finder;
pub mod rules;
pub mod service;

pub use coverage::CoverageGraph;
pub use error::{ErrorKind, RouteError};
pub use geometry::{covers, overlaps, parse_integer, parse_values, validate_area, validate_point};
pub use models::{Area, Axis, AxisRange, Endpoint, Path, Point, Transmitter};
pub use registry::TransmitterRegistry;
pub use route_finder::find_paths;
pub use rules::PlannerRules;
pub use service::{RouteReport, RouteService};
