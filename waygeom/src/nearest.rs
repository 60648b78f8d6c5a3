//! Nearest point on a segment to a query location.
//!
//! The segment and the query are projected with [`WebMercator`], the nearest point is found in the plane, projected
//! back and measured with [`great_circle_distance`].

use waygeom_types::cartesian::Point2;
use waygeom_types::geo::impls::projection::WebMercator;
use waygeom_types::geo::Projection;
use waygeom_types::{Coordinate, FloatCoordinate, Segment};

use crate::distance::great_circle_distance;

/// Result of projecting a query location onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// Distance in metres between the query location and [`NearestPoint::location`].
    pub distance: f64,
    /// Point of the segment closest to the query location.
    pub location: Coordinate,
    /// Position of the location along the segment, `0` at the source and `1` at the target. Always `0` for a
    /// zero-length segment.
    pub ratio: f64,
}

/// Finds the point of the segment `source -> target` nearest to `query`.
///
/// ```
/// use waygeom::perpendicular_distance;
/// use waygeom_types::Coordinate;
///
/// let nearest = perpendicular_distance(
///     Coordinate::from_degrees(0.0, 0.0),
///     Coordinate::from_degrees(0.001, 0.0),
///     Coordinate::from_degrees(0.0005, 0.0005),
/// );
/// assert!((nearest.ratio - 0.5).abs() < 1e-6);
/// assert!(nearest.distance > 50.0 && nearest.distance < 60.0);
/// ```
pub fn perpendicular_distance(
    source: Coordinate,
    target: Coordinate,
    query: Coordinate,
) -> NearestPoint {
    debug_assert!(query.is_valid());

    let projection = WebMercator::<FloatCoordinate, Point2>::default();
    let (ratio, projected) = Segment(
        &projection.forward(&source.into()),
        &projection.forward(&target.into()),
    )
    .project_point(&projection.forward(&query.into()));

    nearest_point(query, ratio, projection.inverse(&projected))
}

/// Same as [`perpendicular_distance`], but uses the given projection for the planar step.
///
/// Returns `None` if the projection fails to convert any of the points.
pub fn perpendicular_distance_with<P>(
    projection: &P,
    source: Coordinate,
    target: Coordinate,
    query: Coordinate,
) -> Option<NearestPoint>
where
    P: Projection<InPoint = FloatCoordinate, OutPoint = Point2> + ?Sized,
{
    debug_assert!(query.is_valid());

    let (ratio, projected) = Segment(
        &projection.project(&source.into())?,
        &projection.project(&target.into())?,
    )
    .project_point(&projection.project(&query.into())?);

    Some(nearest_point(
        query,
        ratio,
        projection.unproject(&projected)?,
    ))
}

/// Distance in metres between `query` and the segment `source -> target`.
pub fn perpendicular_distance_to(source: Coordinate, target: Coordinate, query: Coordinate) -> f64 {
    perpendicular_distance(source, target, query).distance
}

fn nearest_point(query: Coordinate, ratio: f64, location: FloatCoordinate) -> NearestPoint {
    let location = Coordinate::from(location);
    let distance = great_circle_distance(query, location);
    debug_assert!(distance >= 0.0);

    NearestPoint {
        distance,
        location,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use waygeom_types::geo::impls::projection::IdentityProjection;

    #[test]
    fn nearest_point_near_midpoint() {
        let source = Coordinate::from_degrees(0.0, 0.0);
        let target = Coordinate::from_degrees(0.001, 0.0);
        let query = Coordinate::from_degrees(0.0005, 0.0005);

        let nearest = perpendicular_distance(source, target, query);

        assert_abs_diff_eq!(nearest.ratio, 0.5, epsilon = 1e-6);
        assert_eq!(nearest.location, Coordinate::from_degrees(0.0005, 0.0));
        assert!(nearest.distance > 0.0 && nearest.distance < 1_000.0);
        assert_abs_diff_eq!(nearest.distance, 55.6, epsilon = 0.1);
        assert_eq!(perpendicular_distance_to(source, target, query), nearest.distance);
    }

    #[test]
    fn beyond_the_ends_is_clamped() {
        let source = Coordinate::from_degrees(13.0, 52.0);
        let target = Coordinate::from_degrees(13.01, 52.0);

        let before =
            perpendicular_distance(source, target, Coordinate::from_degrees(12.99, 52.001));
        assert_eq!(before.ratio, 0.0);
        assert_eq!(before.location, source);

        let after = perpendicular_distance(source, target, Coordinate::from_degrees(13.02, 51.999));
        assert_eq!(after.ratio, 1.0);
        assert_eq!(after.location, target);
    }

    #[test]
    fn query_on_segment() {
        let source = Coordinate::from_degrees(13.0, 52.0);
        let target = Coordinate::from_degrees(13.01, 52.0);

        let nearest = perpendicular_distance(source, target, target);
        assert_eq!(nearest.ratio, 1.0);
        assert_eq!(nearest.distance, 0.0);
    }

    #[test]
    fn degenerate_segment() {
        let source = Coordinate::from_degrees(13.0, 52.0);
        let query = Coordinate::from_degrees(13.001, 52.001);

        let nearest = perpendicular_distance(source, source, query);
        assert_eq!(nearest.ratio, 0.0);
        assert_eq!(nearest.location, source);
        assert_abs_diff_eq!(
            nearest.distance,
            great_circle_distance(source, query),
            epsilon = 1e-9
        );
    }

    #[test]
    fn custom_projection() {
        let source = Coordinate::from_degrees(0.0, 0.0);
        let target = Coordinate::from_degrees(0.001, 0.0);
        let query = Coordinate::from_degrees(0.00025, -0.0003);

        let projection = IdentityProjection::<FloatCoordinate, Point2>::new();
        let nearest =
            perpendicular_distance_with(&projection, source, target, query).expect("projects");
        let mercator = perpendicular_distance(source, target, query);

        assert_abs_diff_eq!(nearest.ratio, 0.25, epsilon = 1e-9);
        assert_eq!(nearest.location, mercator.location);

        let boxed: Box<dyn Projection<InPoint = FloatCoordinate, OutPoint = Point2>> =
            Box::new(WebMercator::<FloatCoordinate, Point2>::default());
        assert_eq!(
            perpendicular_distance_with(boxed.as_ref(), source, target, query),
            Some(mercator)
        );
    }
}
