//! Shape primitives on coordinates: bearings, turn angles, orientation, interpolation and vector helpers.

use nalgebra::{Rotation2, Vector2};
use waygeom_types::cartesian::{CartesianPoint2d, Orientation, Point2};
use waygeom_types::geo::impls::projection::WebMercator;
use waygeom_types::geo::GeoPoint;
use waygeom_types::{to_floating, Coordinate, FloatCoordinate};

use crate::lookup::{atan2_table, AngleLookup};

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Midpoint of two coordinates, computed on the fixed-point values.
///
/// The division truncates towards zero, so the result can be one fixed-point unit closer to zero than the exact
/// midpoint.
pub fn centroid(lhs: Coordinate, rhs: Coordinate) -> Coordinate {
    let lon = (i64::from(lhs.fixed_lon()) + i64::from(rhs.fixed_lon())) / 2;
    let lat = (i64::from(lhs.fixed_lat()) + i64::from(rhs.fixed_lat())) / 2;

    Coordinate::new(lon as i32, lat as i32)
}

/// Initial great-circle bearing from `first` to `second` in degrees, in `[0, 360)`.
///
/// The bearing of a coordinate to itself is `0`.
pub fn bearing(first: Coordinate, second: Coordinate) -> f64 {
    let lon_delta = deg_to_rad(to_floating(second.fixed_lon() - first.fixed_lon()));
    let lat1 = first.lat_rad();
    let lat2 = second.lat_rad();

    let y = lon_delta.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * lon_delta.cos();

    normalize_degrees(rad_to_deg(y.atan2(x)))
}

/// Angle at `second` between the rays to `first` and `third`, in degrees in `[0, 360)`, measured in web mercator
/// space.
///
/// Going straight through gives `180`. If `second` coincides with either of the other points the angle is not
/// defined and `180` is returned.
pub fn compute_angle(first: Coordinate, second: Coordinate, third: Coordinate) -> f64 {
    compute_angle_with(atan2_table(), first, second, third)
}

/// Same as [`compute_angle`], but with the given arc tangent implementation.
pub fn compute_angle_with(
    lookup: &(impl AngleLookup + ?Sized),
    first: Coordinate,
    second: Coordinate,
    third: Coordinate,
) -> f64 {
    if first == second || second == third {
        return 180.0;
    }

    debug_assert!(first.is_valid());
    debug_assert!(second.is_valid());
    debug_assert!(third.is_valid());

    let projection = WebMercator::<FloatCoordinate, Point2>::default();
    let center = projection.forward(&second.into());
    let v1 = projection.forward(&first.into()).sub(&center);
    let v2 = projection.forward(&third.into()).sub(&center);

    let angle = lookup.atan2(v2.dy(), v2.dx()) - lookup.atan2(v1.dy(), v1.dx());
    normalize_degrees(rad_to_deg(angle))
}

/// Wraps an angle into `[0, 360)` by adding or subtracting full turns.
fn normalize_degrees(mut angle: f64) -> f64 {
    while angle < 0.0 {
        angle += 360.0;
    }
    while angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

/// Signed area of the triangle in square degrees. Positive if the points are in counterclockwise order.
pub fn signed_area(first: Coordinate, second: Coordinate, third: Coordinate) -> f64 {
    let (lon_1, lat_1) = (first.lon(), first.lat());
    let (lon_2, lat_2) = (second.lon(), second.lat());
    let (lon_3, lat_3) = (third.lon(), third.lat());

    0.5 * (-lon_2 * lat_1 + lon_3 * lat_1 + lon_1 * lat_2 - lon_3 * lat_2 - lon_1 * lat_3
        + lon_2 * lat_3)
}

/// Returns true if the three coordinates are given in counterclockwise order.
pub fn is_ccw(first: Coordinate, second: Coordinate, third: Coordinate) -> bool {
    signed_area(first, second, third) > 0.0
}

/// Orientation of the triangle formed by the coordinates.
pub fn orientation(first: Coordinate, second: Coordinate, third: Coordinate) -> Orientation {
    Orientation::from_signed_area(signed_area(first, second, third))
}

/// Interpolates each axis linearly in fixed-point space, truncating the result.
///
/// `factor` must be within `[0, 1]`: `0` gives `from` and `1` gives `to`.
pub fn interpolate_linear(factor: f64, from: Coordinate, to: Coordinate) -> Coordinate {
    debug_assert!((0.0..=1.0).contains(&factor));

    let interpolate = |from: i32, to: i32| {
        let (from, to) = (f64::from(from), f64::from(to));
        (from + factor * (to - from)) as i32
    };

    Coordinate::new(
        interpolate(from.fixed_lon(), to.fixed_lon()),
        interpolate(from.fixed_lat(), to.fixed_lat()),
    )
}

/// Difference `lhs - rhs` of the fixed-point values, as a vector stored in a coordinate.
///
/// Components that do not fit into the fixed-point range saturate at its bounds.
pub fn difference(lhs: Coordinate, rhs: Coordinate) -> Coordinate {
    let saturating_delta = |lhs: i32, rhs: i32| {
        (i64::from(lhs) - i64::from(rhs)).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    };

    Coordinate::new(
        saturating_delta(lhs.fixed_lon(), rhs.fixed_lon()),
        saturating_delta(lhs.fixed_lat(), rhs.fixed_lat()),
    )
}

/// Rotates the degree vector of a coordinate counterclockwise around `(0, 0)`.
///
/// Treats longitude and latitude as plane axes, so the result is not a geographic operation and may lie outside
/// the valid coordinate range.
pub fn rotate_ccw_around_zero(coordinate: Coordinate, angle_in_radians: f64) -> Coordinate {
    let rotated =
        Rotation2::new(angle_in_radians) * Vector2::new(coordinate.lon(), coordinate.lat());
    Coordinate::from_degrees(rotated.x, rotated.y)
}
