//! Circle through three coordinates.
//!
//! The center is the intersection of the perpendicular bisectors of the chords `c1 -> c2` and `c2 -> c3`, computed
//! in degree space. Configurations where a chord slope is undefined or zero are handled by reordering the points
//! before solving, see [`ChordCase`].

use waygeom_types::geo::GeoPoint;
use waygeom_types::{to_floating, Coordinate};

use crate::distance::haversine_distance;

/// Shape of the two chords of a point triplet.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ChordCase {
    /// All points share a longitude or all share a latitude.
    Collinear,
    /// `c1 -> c2` is vertical. Solved as `(c1, c3, c2)`.
    VerticalFirstChord,
    /// `c2 -> c3` is vertical. Solved as `(c2, c1, c3)`.
    VerticalSecondChord,
    /// `c1 -> c2` is horizontal. Solved as `(c3, c2, c1)`.
    FlatFirstChord,
    /// Both chords have a usable slope.
    Generic {
        first_slope: f64,
        second_slope: f64,
    },
}

impl ChordCase {
    fn classify([c1, c2, c3]: [Coordinate; 3]) -> Self {
        let first_lat = to_floating(c2.fixed_lat() - c1.fixed_lat());
        let first_lon = to_floating(c2.fixed_lon() - c1.fixed_lon());
        let second_lat = to_floating(c3.fixed_lat() - c2.fixed_lat());
        let second_lon = to_floating(c3.fixed_lon() - c2.fixed_lon());

        let is_zero = |value: f64| value.abs() < f64::EPSILON;

        if (is_zero(first_lon) && is_zero(second_lon))
            || (is_zero(first_lat) && is_zero(second_lat))
        {
            Self::Collinear
        } else if is_zero(first_lon) {
            Self::VerticalFirstChord
        } else if is_zero(second_lon) {
            Self::VerticalSecondChord
        } else {
            let first_slope = first_lat / first_lon;
            if is_zero(first_slope) {
                Self::FlatFirstChord
            } else {
                Self::Generic {
                    first_slope,
                    second_slope: second_lat / second_lon,
                }
            }
        }
    }
}

/// Center of the circle through three distinct coordinates.
///
/// Returns `None` if two of the points coincide, the points are collinear or the center falls outside of the valid
/// coordinate range.
pub fn circle_center(c1: Coordinate, c2: Coordinate, c3: Coordinate) -> Option<Coordinate> {
    if c1 == c2 || c2 == c3 || c1 == c3 {
        log::trace!("No circle through coincident points {c1}, {c2}, {c3}");
        return None;
    }

    let mut points = [c1, c2, c3];
    loop {
        let [c1, c2, c3] = points;
        points = match ChordCase::classify(points) {
            ChordCase::Collinear => {
                log::trace!("No circle through collinear points {c1}, {c2}, {c3}");
                return None;
            }
            ChordCase::VerticalFirstChord => [c1, c3, c2],
            ChordCase::VerticalSecondChord => [c2, c1, c3],
            ChordCase::FlatFirstChord => [c3, c2, c1],
            ChordCase::Generic {
                first_slope,
                second_slope,
            } => return solve(points, first_slope, second_slope),
        };
    }
}

fn solve([c1, c2, c3]: [Coordinate; 3], first_slope: f64, second_slope: f64) -> Option<Coordinate> {
    if (first_slope - second_slope).abs() < f64::EPSILON {
        log::trace!("Chords of {c1}, {c2}, {c3} are parallel");
        return None;
    }

    let (x1, y1) = (c1.lon(), c1.lat());
    let (x2, y2) = (c2.lon(), c2.lat());
    let (x3, y3) = (c3.lon(), c3.lat());

    let lon = (first_slope * second_slope * (y1 - y3) + second_slope * (x1 + x2)
        - first_slope * (x2 + x3))
        / (2.0 * (second_slope - first_slope));
    let lat = (0.5 * (x1 + x2) - lon) / first_slope + 0.5 * (y1 + y2);

    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        log::trace!("Circle center ({lon}, {lat}) of {c1}, {c2}, {c3} is out of range");
        return None;
    }

    Some(Coordinate::from_degrees(lon, lat))
}

/// Radius in metres of the circle through three coordinates, or infinity if there is no such circle.
pub fn circle_radius(c1: Coordinate, c2: Coordinate, c3: Coordinate) -> f64 {
    match circle_center(c1, c2, c3) {
        Some(center) => haversine_distance(c1, center),
        None => f64::INFINITY,
    }
}
