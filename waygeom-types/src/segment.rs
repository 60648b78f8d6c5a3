use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};

/// A straight line segment from a source to a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: CartesianPoint2d<Num = f64>> Segment<'_, P> {
    /// Projects `point` onto the segment.
    ///
    /// Returns the interpolation ratio along the segment (`0` at the source, `1` at the target) and the projected
    /// point. Normals that fall outside of the segment are clamped to its endpoints. For a zero-length segment the
    /// ratio is `0` and the projected point is the source.
    pub fn project_point<Out, Point>(&self, point: &Point) -> (f64, Out)
    where
        Out: NewCartesianPoint2d<f64>,
        Point: CartesianPoint2d<Num = f64>,
    {
        let ds = self.1.sub(self.0);
        let dp = point.sub(self.0);
        let ds_len = ds.magnitude_sq();

        if ds_len < f64::EPSILON {
            return (0.0, Out::new(self.0.x(), self.0.y()));
        }

        let ratio = (dp.dot(&ds) / ds_len).clamp(0.0, 1.0);
        let projected = Out::new(
            (1.0 - ratio) * self.0.x() + ratio * self.1.x(),
            (1.0 - ratio) * self.0.y() + ratio * self.1.y(),
        );

        (ratio, projected)
    }
}
