use geo_types::LineString;

use crate::error::WaygeomTypesError;
use crate::Coordinate;

/// Converts a line string with `x` as longitude and `y` as latitude into a polyline of fixed-point coordinates,
/// keeping the order of the points.
///
/// Fails on the first point outside of the valid coordinate range.
pub fn polyline_from_line_string(
    line: &LineString<f64>,
) -> Result<Vec<Coordinate>, WaygeomTypesError> {
    line.coords()
        .map(|c| Coordinate::try_from_degrees(c.x, c.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use geo_types::line_string;

    #[test]
    fn keeps_order() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0), (x: 0.001, y: -0.002)];
        assert_eq!(
            polyline_from_line_string(&line),
            Ok(vec![
                Coordinate::new(0, 0),
                Coordinate::new(1_000, 0),
                Coordinate::new(1_000, -2_000),
            ])
        );
    }

    #[test]
    fn rejects_out_of_range_points() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 91.0)];
        assert_matches!(
            polyline_from_line_string(&line),
            Err(WaygeomTypesError::InvalidCoordinate { lat, .. }) if lat == 91.0
        );
    }
}
