use geo_types::Point;

use crate::{Coordinate, FloatCoordinate};

impl From<Point<f64>> for FloatCoordinate {
    fn from(value: Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point(value.into())
    }
}
