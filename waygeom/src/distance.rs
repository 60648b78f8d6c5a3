//! Distance metrics between coordinates.
//!
//! Three functions that are not interchangeable:
//! * [`squared_euclidean_distance`] - cheap proxy for ordering nearby points, without a unit.
//! * [`haversine_distance`] - spherical distance in metres, valid at any range.
//! * [`great_circle_distance`] - flat-earth approximation in metres for short distances.

use waygeom_types::geo::GeoPoint;
use waygeom_types::Coordinate;

/// Radius of the Earth sphere used by the distance functions, in metres.
pub const EARTH_RADIUS: f64 = 6_372_797.560_856;

/// Squared difference of the fixed-point coordinates, without any spherical or projected correction.
///
/// Only usable to compare distances between points that are close to each other and at a similar latitude.
pub fn squared_euclidean_distance(lhs: Coordinate, rhs: Coordinate) -> u64 {
    let dx = i64::from(lhs.fixed_lon()) - i64::from(rhs.fixed_lon());
    let dy = i64::from(lhs.fixed_lat()) - i64::from(rhs.fixed_lat());

    (dx * dx + dy * dy) as u64
}

/// Haversine distance between two coordinates in metres.
///
/// ```
/// use waygeom::haversine_distance;
/// use waygeom_types::Coordinate;
///
/// let berlin = Coordinate::from_degrees(13.405, 52.52);
/// let paris = Coordinate::from_degrees(2.3522, 48.8566);
///
/// assert!((haversine_distance(berlin, paris) - 878_000.0).abs() < 5_000.0);
/// ```
pub fn haversine_distance(first: Coordinate, second: Coordinate) -> f64 {
    debug_assert!(first != Coordinate::INVALID && second != Coordinate::INVALID);

    let (lat1, lon1) = (first.lat_rad(), first.lon_rad());
    let (lat2, lon2) = (second.lat_rad(), second.lon_rad());

    let d_lat = lat1 - lat2;
    let d_lon = lon1 - lon2;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` past 1 for antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}

/// Approximate distance in metres that scales the longitude difference by the cosine of the mean latitude.
///
/// Faster than [`haversine_distance`] and accurate for the length of a road segment. Do not use for long ranges.
pub fn great_circle_distance(first: Coordinate, second: Coordinate) -> f64 {
    debug_assert!(first != Coordinate::INVALID && second != Coordinate::INVALID);

    let (lat1, lon1) = (first.lat_rad(), first.lon_rad());
    let (lat2, lon2) = (second.lat_rad(), second.lon_rad());

    let x = (lon2 - lon1) * ((lat1 + lat2) / 2.0).cos();
    let y = lat2 - lat1;

    x.hypot(y) * EARTH_RADIUS
}

/// Length of a polyline in metres as the sum of haversine distances of its consecutive points.
pub fn polyline_length(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}
