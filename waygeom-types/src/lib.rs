//! Value types shared by the `waygeom` geometry toolkit.
//!
//! * [`Coordinate`] and [`FloatCoordinate`] - a geographic point in fixed-point and floating-point degree form.
//! * [`geo`] - geographic point traits and planar [`Projection`](geo::Projection)s (web mercator and identity).
//! * [`cartesian`] - points and vectors in a projected plane.
//! * [`Segment`] - projection of a point onto a segment in the projected plane.

pub mod cartesian;
pub mod error;
pub mod geo;

mod coordinate;
pub use coordinate::{to_fixed, to_floating, Coordinate, FloatCoordinate, COORDINATE_PRECISION};

mod segment;
pub use segment::Segment;

#[cfg(feature = "geo-types")]
mod geo_types;
#[cfg(feature = "geo-types")]
pub use crate::geo_types::polyline_from_line_string;
