use crate::cartesian::NewCartesianPoint2d;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;
use std::marker::PhantomData;

/// Uses longitude and latitude degrees directly as `x` and `y` of the plane.
///
/// Not conformal: one degree of longitude is shorter than a degree of latitude away from the equator.
#[derive(Debug, Copy, Clone)]
pub struct IdentityProjection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> IdentityProjection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for IdentityProjection<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> IdentityProjection<In, Out> {
    /// Maps a geographic point onto the plane.
    pub fn forward(&self, input: &In) -> Out {
        Out::new(input.lon(), input.lat())
    }

    /// Maps a plane point back to a geographic one.
    pub fn inverse(&self, input: &Out) -> In {
        In::lonlat(input.x(), input.y())
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for IdentityProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        Some(self.forward(input))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        Some(self.inverse(input))
    }
}
