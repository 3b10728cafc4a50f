//! Geometry validation and coverage math on the integer planning grid.
//!
//! Distances are compared in squared integer form, so touching coverage
//! circles are detected exactly.

use crate::error::{Result, RouteError};
use crate::models::{Area, Axis, AxisRange, Coord, Point, Transmitter};

/// Parse a single integer token.
pub fn parse_integer(token: &str) -> Result<i64> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| RouteError::InvalidCoordinateType {
            value: token.trim().to_string(),
        })
}

/// Parse a whitespace-separated line holding exactly `expected` integers.
///
/// The value count is checked before any token is parsed.
pub fn parse_values(line: &str, expected: usize) -> Result<Vec<i64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(RouteError::WrongValueCount {
            expected,
            got: tokens.len(),
        });
    }
    tokens.into_iter().map(parse_integer).collect()
}

/// Check that `(x, y)` lies inside `area`, bounds inclusive.
pub fn validate_point(x: i64, y: i64, area: &Area) -> Result<Point> {
    let x = checked_axis(Axis::X, x, area)?;
    let y = checked_axis(Axis::Y, y, area)?;
    Ok(Point::new(x, y))
}

fn checked_axis(axis: Axis, value: i64, area: &Area) -> Result<Coord> {
    let range = match axis {
        Axis::X => &area.x,
        Axis::Y => &area.y,
    };
    let out_of_bounds = || RouteError::OutOfAreaBounds {
        axis,
        value,
        area: *area,
    };
    if !range.contains(value) {
        return Err(out_of_bounds());
    }
    Coord::try_from(value).map_err(|_| out_of_bounds())
}

/// Check both axis intervals and build an [`Area`] from them.
pub fn validate_area(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Result<Area> {
    Ok(Area {
        x: validate_axis_range(Axis::X, x_min, x_max)?,
        y: validate_axis_range(Axis::Y, y_min, y_max)?,
    })
}

fn validate_axis_range(axis: Axis, min: i64, max: i64) -> Result<AxisRange> {
    let invalid = |reason| RouteError::InvalidAreaBounds {
        axis,
        min,
        max,
        reason,
    };
    if min > max {
        return Err(invalid(
            "second coordinate must be equal or greater than the first one",
        ));
    }
    if min < 0 {
        return Err(invalid("every coordinate must be a non-negative integer"));
    }
    let min = Coord::try_from(min).map_err(|_| invalid("bound exceeds the coordinate range"))?;
    let max = Coord::try_from(max).map_err(|_| invalid("bound exceeds the coordinate range"))?;
    Ok(AxisRange { min, max })
}

/// Check a transmitter power value.
pub fn validate_power(power: i64) -> Result<Coord> {
    if power < 0 {
        return Err(RouteError::InvalidPower { power });
    }
    Coord::try_from(power).map_err(|_| RouteError::InvalidPower { power })
}

fn distance_squared(a: Point, b: Point) -> u128 {
    let dx = i128::from(a.x) - i128::from(b.x);
    let dy = i128::from(a.y) - i128::from(b.y);
    (dx * dx + dy * dy) as u128
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (distance_squared(a, b) as f64).sqrt()
}

/// True if `point` lies inside (or on the edge of) the transmitter's zone.
pub fn covers(transmitter: &Transmitter, point: Point) -> bool {
    let radius = u128::from(transmitter.power);
    distance_squared(transmitter.center(), point) <= radius * radius
}

/// True if the coverage zones of `a` and `b` touch or overlap.
pub fn overlaps(a: &Transmitter, b: &Transmitter) -> bool {
    let reach = u128::from(a.power) + u128::from(b.power);
    distance_squared(a.center(), b.center()) <= reach * reach
}
