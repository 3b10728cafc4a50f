//! Route feasibility service: the single entry point for callers.

use crate::coverage::CoverageGraph;
use crate::error::{ErrorKind, Result, RouteError};
use crate::geometry::distance;
use crate::models::{Area, Endpoint, Path, Point, Transmitter};
use crate::registry::TransmitterRegistry;
use crate::route_finder::find_paths;
use crate::rules::PlannerRules;
use serde::{Deserialize, Serialize};

/// Structured outcome of a route check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteReport {
    pub found: bool,
    pub paths: Vec<Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ErrorKind>,
}

impl RouteReport {
    fn from_result(result: Result<Vec<Path>>) -> Self {
        match result {
            Ok(paths) => Self {
                found: true,
                paths,
                reason: None,
            },
            Err(e) => Self {
                found: false,
                paths: Vec::new(),
                reason: Some(e.kind()),
            },
        }
    }
}

/// One planning session. Owns its registry; nothing is shared between
/// instances.
#[derive(Debug, Clone, Default)]
pub struct RouteService {
    registry: TransmitterRegistry,
}

impl RouteService {
    pub fn new(rules: &PlannerRules) -> Self {
        Self {
            registry: TransmitterRegistry::new(rules),
        }
    }

    pub fn registry(&self) -> &TransmitterRegistry {
        &self.registry
    }

    pub fn set_area(&mut self, x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Result<Area> {
        self.registry.set_area(x_min, x_max, y_min, y_max)
    }

    pub fn add_transmitter(&mut self, x: i64, y: i64, power: i64) -> Result<Transmitter> {
        self.registry.add_transmitter(x, y, power)
    }

    pub fn set_start(&mut self, x: i64, y: i64) -> Result<Point> {
        self.registry.set_start(x, y)
    }

    pub fn set_end(&mut self, x: i64, y: i64) -> Result<Point> {
        self.registry.set_end(x, y)
    }

    pub fn list_transmitters(&self) -> &[Transmitter] {
        self.registry.list_transmitters()
    }

    /// Find every safe route between the current start and end points.
    ///
    /// The coverage graph is rebuilt from the current transmitters on each
    /// call. An empty search result and a start transmitter missing from the
    /// graph are both reported as [`RouteError::NoRouteFound`].
    pub fn check_route(&self) -> Result<Vec<Path>> {
        let (Some(start), Some(end)) = (self.registry.start(), self.registry.end()) else {
            return Err(RouteError::MissingEndpoints);
        };

        let t_start = self
            .registry
            .covering_transmitter(start)
            .ok_or(RouteError::PointUncovered(Endpoint::Start))?;
        let t_end = self
            .registry
            .covering_transmitter(end)
            .ok_or(RouteError::PointUncovered(Endpoint::End))?;
        tracing::debug!(
            %t_start,
            %t_end,
            start_offset = distance(start, t_start.center()),
            end_offset = distance(end, t_end.center()),
            "Endpoints covered"
        );

        let graph = CoverageGraph::build(self.registry.list_transmitters());
        match find_paths(&graph, t_start, t_end) {
            Some(paths) if !paths.is_empty() => {
                tracing::info!(routes = paths.len(), "Safe route found");
                Ok(paths)
            }
            _ => Err(RouteError::NoRouteFound),
        }
    }

    /// Same as [`check_route`](Self::check_route), folded into a report.
    pub fn route_report(&self) -> RouteReport {
        let result = self
            .check_route()
            .inspect_err(|e| tracing::info!(reason = ?e.kind(), "No safe route: {e}"));
        RouteReport::from_result(result)
    }
}
