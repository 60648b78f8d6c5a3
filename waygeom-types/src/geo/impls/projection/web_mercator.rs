use crate::cartesian::NewCartesianPoint2d;
use crate::geo::datum::Datum;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::marker::PhantomData;

/// Latitude limit of the web mercator square, `atan(sinh(PI))` in degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Spherical web mercator projection.
///
/// Conformal, so angles and ratios measured in the projected plane match the ones on the ground for short
/// distances. Latitudes beyond [`MAX_LATITUDE`] are clamped, which makes [`WebMercator::forward`] total for valid
/// coordinates.
#[derive(Debug, Copy, Clone)]
pub struct WebMercator<In, Out> {
    datum: Datum,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> WebMercator<In, Out> {
    /// Creates a projection scaled by the semimajor axis of the `datum`.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }

    /// Projected `y` of a latitude given in degrees.
    pub fn lat_to_y(&self, lat: f64) -> f64 {
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        self.datum.semimajor() * (FRAC_PI_4 + lat / 2.0).tan().ln()
    }

    /// Latitude in degrees of a projected `y`.
    pub fn y_to_lat(&self, y: f64) -> f64 {
        (2.0 * (y / self.datum.semimajor()).exp().atan() - FRAC_PI_2).to_degrees()
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> WebMercator<In, Out> {
    /// Projects a geographic point into the plane.
    pub fn forward(&self, input: &In) -> Out {
        Out::new(
            self.datum.semimajor() * input.lon_rad(),
            self.lat_to_y(input.lat()),
        )
    }

    /// Returns the geographic point of a projected one.
    pub fn inverse(&self, input: &Out) -> In {
        In::latlon(
            self.y_to_lat(input.y()),
            (input.x() / self.datum.semimajor()).to_degrees(),
        )
    }
}

impl<In, Out> Default for WebMercator<In, Out> {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for WebMercator<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let projected = self.forward(input);
        if projected.x().is_finite() && projected.y().is_finite() {
            Some(projected)
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let point = self.inverse(input);
        if point.lat().is_finite() && point.lon().is_finite() {
            Some(point)
        } else {
            None
        }
    }
}
