//! Polyline analysis: regression lines, closest distances, deviation profiles, parallelism and simplification.
//!
//! Polylines are plain coordinate slices. Functions that need a direction require at least two points and panic
//! otherwise. Closest-distance queries treat a polyline without segments as infinitely far away and return
//! [`f64::MAX`].

use waygeom_types::cartesian::Point2;
use waygeom_types::geo::impls::projection::IdentityProjection;
use waygeom_types::geo::GeoPoint;
use waygeom_types::{Coordinate, FloatCoordinate, Segment, COORDINATE_PRECISION};

use crate::distance::haversine_distance;
use crate::nearest::perpendicular_distance_to;
use crate::shape::{bearing, deg_to_rad, difference, rotate_ccw_around_zero};
use crate::tunables::Tunables;

/// Line approximating the direction of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionLine {
    /// Least-squares fit, from slightly before the smallest to slightly after the largest longitude of the
    /// polyline.
    Fitted(Coordinate, Coordinate),
    /// The fit is vertical or otherwise unstable. Holds the first and the last point of the polyline.
    Degenerate(Coordinate, Coordinate),
}

impl RegressionLine {
    /// Start and end of the line.
    pub fn endpoints(&self) -> (Coordinate, Coordinate) {
        match *self {
            Self::Fitted(first, last) | Self::Degenerate(first, last) => (first, last),
        }
    }

    /// Returns true if the line comes from an actual fit.
    pub fn is_fitted(&self) -> bool {
        matches!(self, Self::Fitted(..))
    }
}

/// Fits a line through the coordinates with ordinary least squares on `(lon, lat)` degrees.
///
/// # Panics
///
/// Panics if less than two coordinates are given.
pub fn least_square_regression(coordinates: &[Coordinate]) -> RegressionLine {
    least_square_regression_with(&Tunables::default(), coordinates)
}

/// Same as [`least_square_regression`], with explicit [`Tunables`].
pub fn least_square_regression_with(
    tunables: &Tunables,
    coordinates: &[Coordinate],
) -> RegressionLine {
    assert!(
        coordinates.len() >= 2,
        "regression needs at least two coordinates, got {}",
        coordinates.len()
    );

    let first = coordinates[0];
    let last = coordinates[coordinates.len() - 1];

    // Sums are taken relative to the first point so large longitudes don't cancel out.
    let n = coordinates.len() as f64;
    let mut sum_lon = 0.0;
    let mut sum_lat = 0.0;
    let mut sum_lon_lat = 0.0;
    let mut sum_lon_lon = 0.0;
    let mut min_lon = f64::MAX;
    let mut max_lon = f64::MIN;

    for coordinate in coordinates {
        let lon = fixed_delta(coordinate.fixed_lon(), first.fixed_lon());
        let lat = fixed_delta(coordinate.fixed_lat(), first.fixed_lat());
        sum_lon += lon;
        sum_lat += lat;
        sum_lon_lat += lon * lat;
        sum_lon_lon += lon * lon;
        min_lon = min_lon.min(lon);
        max_lon = max_lon.max(lon);
    }

    let dividend = n * sum_lon_lat - sum_lon * sum_lat;
    let divisor = n * sum_lon_lon - sum_lon * sum_lon;

    if divisor.abs() < tunables.regression_epsilon {
        log::trace!(
            "Degenerate regression over {} coordinates from {first} to {last}",
            coordinates.len()
        );
        return RegressionLine::Degenerate(first, last);
    }

    let slope = dividend / divisor;
    let intercept = (sum_lat - slope * sum_lon) / n;
    let on_line = |lon: f64| {
        Coordinate::from_degrees(first.lon() + lon, first.lat() + intercept + slope * lon)
    };

    RegressionLine::Fitted(
        on_line(min_lon - tunables.regression_margin),
        on_line(max_lon + tunables.regression_margin),
    )
}

/// Difference of two fixed-point values in degrees, exact for any pair of valid coordinates.
fn fixed_delta(value: i32, origin: i32) -> f64 {
    (i64::from(value) - i64::from(origin)) as f64 / COORDINATE_PRECISION
}

/// Haversine distance in metres between `query` and the closest point of the segment `source -> target`.
///
/// The closest point is found in the unprojected degree plane.
pub fn closest_distance_to_segment(
    query: Coordinate,
    source: Coordinate,
    target: Coordinate,
) -> f64 {
    if source == target {
        log::trace!("Closest distance to zero-length segment at {source}");
    }

    let projection = IdentityProjection::<FloatCoordinate, Point2>::new();
    let (_, nearest): (f64, Point2) = Segment(
        &projection.forward(&source.into()),
        &projection.forward(&target.into()),
    )
    .project_point(&projection.forward(&query.into()));

    haversine_distance(query, projection.inverse(&nearest).into())
}

/// Smallest [`closest_distance_to_segment`] over all consecutive pairs of the polyline.
pub fn closest_distance_to_polyline(query: Coordinate, polyline: &[Coordinate]) -> f64 {
    polyline
        .windows(2)
        .map(|pair| closest_distance_to_segment(query, pair[0], pair[1]))
        .fold(f64::MAX, f64::min)
}

/// Smallest distance from any point of `lhs` to the polyline `rhs`.
pub fn closest_distance_between(lhs: &[Coordinate], rhs: &[Coordinate]) -> f64 {
    lhs.iter()
        .map(|&point| closest_distance_to_polyline(point, rhs))
        .fold(f64::MAX, f64::min)
}

/// Closest distance of each point of `source` to the polyline `target`, in the order of `source`.
pub fn deviations(source: &[Coordinate], target: &[Coordinate]) -> Vec<f64> {
    source
        .iter()
        .map(|&point| closest_distance_to_polyline(point, target))
        .collect()
}

/// Returns true if the regression lines of the two polylines run in parallel.
///
/// Both line directions are rotated so that the direction of `lhs` points east. The polylines are parallel if the
/// rotated direction of `rhs` is flatter than [`Tunables::parallel_slope_threshold`].
///
/// # Panics
///
/// Panics if either polyline has less than two coordinates.
pub fn are_parallel(lhs: &[Coordinate], rhs: &[Coordinate]) -> bool {
    are_parallel_with(&Tunables::default(), lhs, rhs)
}

/// Same as [`are_parallel`], with explicit [`Tunables`].
pub fn are_parallel_with(tunables: &Tunables, lhs: &[Coordinate], rhs: &[Coordinate]) -> bool {
    let (lhs_first, lhs_last) = least_square_regression_with(tunables, lhs).endpoints();
    let (rhs_first, rhs_last) = least_square_regression_with(tunables, rhs).endpoints();

    let null_island = Coordinate::new(0, 0);
    let lhs_direction = difference(lhs_first, lhs_last);
    let rhs_direction = difference(rhs_first, rhs_last);

    let rotation = deg_to_rad(bearing(null_island, lhs_direction) - 90.0);
    let slope = slope_from_origin(rotate_ccw_around_zero(rhs_direction, rotation));

    slope.abs() < tunables.parallel_slope_threshold
}

/// Slope of the vector stored in a coordinate. [`f64::MAX`] for vertical vectors.
fn slope_from_origin(direction: Coordinate) -> f64 {
    let d_lon = -f64::from(direction.fixed_lon());
    let d_lat = -f64::from(direction.fixed_lat());

    if d_lon == 0.0 {
        f64::MAX
    } else {
        d_lat / d_lon
    }
}

/// Ramer-Douglas-Peucker simplification.
///
/// Removes points that are closer than `tolerance` metres to the line between the kept points around them. The
/// first and the last point are always kept.
pub fn simplify(coordinates: &[Coordinate], tolerance: f64) -> Vec<Coordinate> {
    if coordinates.len() <= 2 {
        return coordinates.to_vec();
    }

    let last = coordinates.len() - 1;
    let mut keep = vec![false; coordinates.len()];
    keep[0] = true;
    keep[last] = true;
    mark_significant(coordinates, tolerance, 0, last, &mut keep);

    coordinates
        .iter()
        .zip(keep)
        .filter_map(|(&coordinate, keep)| keep.then_some(coordinate))
        .collect()
}

fn mark_significant(
    coordinates: &[Coordinate],
    tolerance: f64,
    first: usize,
    last: usize,
    keep: &mut [bool],
) {
    if last <= first + 1 {
        return;
    }

    let (index, distance) = (first + 1..last)
        .map(|i| {
            let distance =
                perpendicular_distance_to(coordinates[first], coordinates[last], coordinates[i]);
            (i, distance)
        })
        .fold((first, 0.0), |farthest, candidate| {
            if candidate.1 > farthest.1 {
                candidate
            } else {
                farthest
            }
        });

    if distance > tolerance {
        keep[index] = true;
        mark_significant(coordinates, tolerance, first, index, keep);
        mark_significant(coordinates, tolerance, index, last, keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::from_degrees(lon, lat)
    }

    /// Length of a thousandth of a degree along a meridian.
    const MILLI_DEGREE: f64 = 111.226;

    #[test]
    fn regression_of_vertical_pair_is_degenerate() {
        let line = least_square_regression(&[c(13.0, 52.0), c(13.0, 52.1)]);
        assert_eq!(line, RegressionLine::Degenerate(c(13.0, 52.0), c(13.0, 52.1)));
        assert!(!line.is_fitted());
        assert_eq!(line.endpoints(), (c(13.0, 52.0), c(13.0, 52.1)));
    }

    #[test]
    fn regression_of_vertical_polyline_far_from_greenwich() {
        for lon in [151.2093, -74.006, 179.999, -179.999] {
            let vertical = [c(lon, 52.0), c(lon, 52.005), c(lon, 52.01), c(lon, 52.02)];
            let horizontal = [c(lon, 52.0), c(lon + 0.001, 52.0)];

            assert_eq!(
                least_square_regression(&vertical),
                RegressionLine::Degenerate(vertical[0], vertical[3])
            );
            assert!(!are_parallel(&horizontal, &vertical), "lon {lon}");
            assert!(!are_parallel(&vertical, &horizontal), "lon {lon}");
        }
    }

    #[test]
    fn regression_far_from_greenwich_keeps_its_slope() {
        let coordinates = [c(151.0, -33.0), c(151.001, -32.999), c(151.002, -32.998)];
        let line = least_square_regression(&coordinates);
        assert_matches!(line, RegressionLine::Fitted(first, last) => {
            assert_eq!(first, c(150.99999, -33.00001));
            assert_eq!(last, c(151.00201, -32.99799));
        });
    }

    #[test]
    fn regression_of_two_points_follows_their_line() {
        let line = least_square_regression(&[c(0.0, 0.0), c(1.0, 1.0)]);
        assert_matches!(line, RegressionLine::Fitted(first, last) => {
            assert_eq!(first, Coordinate::new(-10, -10));
            assert_eq!(last, Coordinate::new(1_000_010, 1_000_010));
        });
    }

    #[test]
    fn regression_of_noisy_line() {
        let coordinates = [
            c(0.0, 0.0001),
            c(0.001, -0.0001),
            c(0.002, 0.0001),
            c(0.003, -0.0001),
        ];
        let (first, last) = least_square_regression(&coordinates).endpoints();

        assert_abs_diff_eq!(first.lon(), -0.00001, epsilon = 1e-9);
        assert_abs_diff_eq!(last.lon(), 0.00301, epsilon = 1e-9);
        assert!(first.lat().abs() < 0.0001 && last.lat().abs() < 0.0001);
    }

    #[test]
    fn regression_margin_is_configurable() {
        let tunables = Tunables {
            regression_margin: 0.5,
            ..Default::default()
        };
        let line = least_square_regression_with(&tunables, &[c(0.0, 0.0), c(1.0, 0.0)]);
        assert_eq!(line, RegressionLine::Fitted(c(-0.5, 0.0), c(1.5, 0.0)));
    }

    #[test]
    #[should_panic]
    fn regression_needs_two_points() {
        least_square_regression(&[c(0.0, 0.0)]);
    }

    #[test]
    fn distance_to_segment() {
        let (source, target) = (c(0.0, 0.0), c(0.001, 0.0));

        assert_abs_diff_eq!(
            closest_distance_to_segment(c(0.0005, 0.0005), source, target),
            MILLI_DEGREE / 2.0,
            epsilon = 0.01
        );
        assert_abs_diff_eq!(
            closest_distance_to_segment(c(0.002, 0.0), source, target),
            MILLI_DEGREE,
            epsilon = 0.01
        );
        assert_eq!(closest_distance_to_segment(c(0.0005, 0.0), source, target), 0.0);
        assert_abs_diff_eq!(
            closest_distance_to_segment(c(0.0, 0.001), source, source),
            MILLI_DEGREE,
            epsilon = 0.01
        );
    }

    #[test]
    fn distance_to_polyline_checks_every_segment() {
        let polyline = [c(0.0, 0.0), c(0.001, 0.0), c(0.001, 0.001), c(0.0, 0.001)];

        assert_abs_diff_eq!(
            closest_distance_to_polyline(c(0.0015, 0.0005), &polyline),
            MILLI_DEGREE / 2.0,
            epsilon = 0.01
        );
        assert_abs_diff_eq!(
            closest_distance_to_polyline(c(0.0005, 0.0012), &polyline),
            MILLI_DEGREE / 5.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn distance_without_segments() {
        let point = c(0.0, 0.0);
        assert_eq!(closest_distance_to_polyline(point, &[]), f64::MAX);
        assert_eq!(closest_distance_to_polyline(point, &[point]), f64::MAX);
        assert_eq!(closest_distance_between(&[], &[point, c(1.0, 1.0)]), f64::MAX);
    }

    #[test]
    fn distance_between_polylines() {
        let lhs = [c(0.0, 0.001), c(0.001, 0.001)];
        let rhs = [c(0.0, 0.0), c(0.001, 0.0)];

        assert_abs_diff_eq!(
            closest_distance_between(&lhs, &rhs),
            MILLI_DEGREE,
            epsilon = 0.01
        );
    }

    #[test]
    fn deviation_profile() {
        let source = [c(0.0, 0.0), c(0.0005, 0.0005), c(0.001, 0.001), c(0.002, 0.0)];
        let target = [c(0.0, 0.0), c(0.002, 0.0)];

        let profile = deviations(&source, &target);

        assert_eq!(profile.len(), source.len());
        assert_eq!(profile[0], 0.0);
        assert_abs_diff_eq!(profile[1], MILLI_DEGREE / 2.0, epsilon = 0.01);
        assert_abs_diff_eq!(profile[2], MILLI_DEGREE, epsilon = 0.01);
        assert_eq!(profile[3], 0.0);
    }

    #[test]
    fn parallel_horizontal_lines() {
        let lhs = [c(13.0, 52.0), c(13.01, 52.0)];
        let rhs = [c(13.0, 52.01), c(13.01, 52.01)];

        assert!(are_parallel(&lhs, &rhs));
        assert!(are_parallel(&rhs, &lhs));
    }

    #[test]
    fn parallel_diagonal_lines() {
        let lhs = [c(0.0, 0.0), c(0.005, 0.005), c(0.01, 0.01)];
        let rhs = [c(0.001, 0.0), c(0.011, 0.01)];

        assert!(are_parallel(&lhs, &rhs));
    }

    #[test]
    fn crossing_lines_are_not_parallel() {
        let horizontal = [c(13.0, 52.0), c(13.01, 52.0)];
        let vertical = [c(13.005, 51.995), c(13.005, 52.005)];
        let diagonal = [c(13.0, 52.0), c(13.01, 52.01)];
        let anti_diagonal = [c(13.0, 52.01), c(13.01, 52.0)];

        assert!(!are_parallel(&horizontal, &vertical));
        assert!(!are_parallel(&vertical, &horizontal));
        assert!(!are_parallel(&diagonal, &anti_diagonal));
    }

    #[test]
    fn parallel_threshold_is_configurable() {
        let lhs = [c(0.0, 0.0), c(0.01, 0.0)];
        let rhs = [c(0.0, 0.0), c(0.01, 0.0005)];

        assert!(are_parallel(&lhs, &rhs));

        let strict = Tunables {
            parallel_slope_threshold: 0.01,
            ..Default::default()
        };
        assert!(!are_parallel_with(&strict, &lhs, &rhs));
    }

    #[test]
    fn simplify_straight_line() {
        let line: Vec<_> = (0..10).map(|i| c(i as f64 * 0.001, 0.0)).collect();
        assert_eq!(simplify(&line, 1.0), vec![line[0], line[9]]);
    }

    #[test]
    fn simplify_keeps_significant_points() {
        // About a metre off the straight lines to the peak.
        let peak = [
            c(0.0, 0.0),
            c(0.001, 0.000_51),
            c(0.002, 0.001),
            c(0.003, 0.000_51),
            c(0.004, 0.0),
        ];

        assert_eq!(simplify(&peak, 10.0), vec![peak[0], peak[2], peak[4]]);
        assert_eq!(simplify(&peak, 0.1), peak.to_vec());
        assert_eq!(simplify(&peak, 1_000.0), vec![peak[0], peak[4]]);
    }

    #[test]
    fn simplify_short_input() {
        assert!(simplify(&[], 1.0).is_empty());
        assert_eq!(simplify(&[c(1.0, 1.0)], 1.0), vec![c(1.0, 1.0)]);
    }
}
