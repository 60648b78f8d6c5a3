use geo_types::{coord, Coord};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::{Coordinate, FloatCoordinate};

impl CartesianPoint2d for Coord<f64> {
    type Num = f64;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl NewCartesianPoint2d<f64> for Coord<f64> {
    fn new(x: f64, y: f64) -> Self {
        coord!(x: x, y: y)
    }
}

impl From<Coord<f64>> for FloatCoordinate {
    fn from(value: Coord<f64>) -> Self {
        FloatCoordinate::new(value.x, value.y)
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Coordinate::from_degrees(value.x, value.y)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        let value = FloatCoordinate::from(value);
        value.into()
    }
}

impl From<FloatCoordinate> for Coord<f64> {
    fn from(value: FloatCoordinate) -> Self {
        use crate::geo::GeoPoint;
        coord!(x: value.lon(), y: value.lat())
    }
}
