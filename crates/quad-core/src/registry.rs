//! Transmitter registry: planning area, transmitters and route endpoints.

use crate::error::{Result, RouteError};
use crate::geometry::{covers, validate_area, validate_point, validate_power};
use crate::models::{Area, Point, Transmitter};
use crate::rules::PlannerRules;

/// Owns all mutable planning state for one session.
///
/// Every mutation validates first and applies only on success, so a
/// rejected call never leaves partial changes behind.
#[derive(Debug, Clone)]
pub struct TransmitterRegistry {
    area: Area,
    transmitters: Vec<Transmitter>,
    start: Option<Point>,
    end: Option<Point>,
    revalidate_endpoints: bool,
}

impl Default for TransmitterRegistry {
    fn default() -> Self {
        Self::new(&PlannerRules::default())
    }
}

impl TransmitterRegistry {
    pub fn new(rules: &PlannerRules) -> Self {
        Self {
            area: rules.default_area,
            transmitters: Vec::new(),
            start: None,
            end: None,
            revalidate_endpoints: rules.revalidate_endpoints,
        }
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Replace the planning area.
    pub fn set_area(&mut self, x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Result<Area> {
        let area = validate_area(x_min, x_max, y_min, y_max)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected area"))?;
        self.area = area;
        tracing::debug!(%area, "Area coordinates set");

        if self.revalidate_endpoints {
            self.start = self.start.filter(|p| Self::endpoint_still_inside(*p, &area, "start"));
            self.end = self.end.filter(|p| Self::endpoint_still_inside(*p, &area, "end"));
        }
        Ok(area)
    }

    fn endpoint_still_inside(point: Point, area: &Area, label: &str) -> bool {
        let inside = validate_point(i64::from(point.x), i64::from(point.y), area).is_ok();
        if !inside {
            tracing::warn!(%point, endpoint = label, "Endpoint left the new area, clearing it");
        }
        inside
    }

    /// Register a new transmitter.
    ///
    /// Checks run in order: position inside the area, power, uniqueness.
    pub fn add_transmitter(&mut self, x: i64, y: i64, power: i64) -> Result<Transmitter> {
        let transmitter = self
            .check_transmitter(x, y, power)
            .inspect_err(|e| tracing::warn!(x, y, power, error = %e, "Rejected transmitter"))?;
        self.transmitters.push(transmitter);
        tracing::debug!(%transmitter, count = self.transmitters.len(), "Transmitter added");
        Ok(transmitter)
    }

    fn check_transmitter(&self, x: i64, y: i64, power: i64) -> Result<Transmitter> {
        let center = validate_point(x, y, &self.area)?;
        let power = validate_power(power)?;
        let transmitter = Transmitter::new(center.x, center.y, power);
        if self.transmitters.contains(&transmitter) {
            return Err(RouteError::DuplicateTransmitter(transmitter));
        }
        Ok(transmitter)
    }

    pub fn set_start(&mut self, x: i64, y: i64) -> Result<Point> {
        let point = validate_point(x, y, &self.area)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected starting point"))?;
        self.start = Some(point);
        tracing::debug!(%point, "Starting point set");
        Ok(point)
    }

    pub fn set_end(&mut self, x: i64, y: i64) -> Result<Point> {
        let point = validate_point(x, y, &self.area)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected ending point"))?;
        self.end = Some(point);
        tracing::debug!(%point, "Ending point set");
        Ok(point)
    }

    /// All transmitters in registration order.
    pub fn list_transmitters(&self) -> &[Transmitter] {
        &self.transmitters
    }

    pub fn len(&self) -> usize {
        self.transmitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transmitters.is_empty()
    }

    /// First transmitter, in registration order, whose zone contains `point`.
    pub fn covering_transmitter(&self, point: Point) -> Option<Transmitter> {
        self.transmitters
            .iter()
            .find(|t| covers(t, point))
            .copied()
    }
}
