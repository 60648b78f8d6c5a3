//! Points and vectors in a projected plane.

mod orient;
mod point;

pub use orient::Orientation;
pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2, Vector2};
