//! Geometry building blocks for road network routing.
//!
//! Every function here is a pure function of its arguments. Coordinates are the fixed-point
//! [`Coordinate`](waygeom_types::Coordinate)s of the [`waygeom_types`] crate, polylines are plain slices of them.
//!
//! # Quick start
//!
//! ```
//! use waygeom::{are_parallel, haversine_distance, perpendicular_distance};
//! use waygeom::waygeom_types::Coordinate;
//!
//! let source = Coordinate::from_degrees(13.388, 52.517);
//! let target = Coordinate::from_degrees(13.397, 52.529);
//! let query = Coordinate::from_degrees(13.394, 52.520);
//!
//! let nearest = perpendicular_distance(source, target, query);
//! assert!(nearest.distance < haversine_distance(source, query));
//! assert!((0.0..=1.0).contains(&nearest.ratio));
//!
//! let road = [source, target];
//! let sidewalk = [
//!     Coordinate::from_degrees(13.3881, 52.5169),
//!     Coordinate::from_degrees(13.3971, 52.5289),
//! ];
//! assert!(are_parallel(&road, &sidewalk));
//! ```
//!
//! # Components
//!
//! * [`distance`] - proxy, haversine and flat-earth distances.
//! * [`perpendicular_distance`] - nearest point of a segment, computed in web mercator space.
//! * [`shape`] - bearings, turn angles, orientation, interpolation and vector helpers, and the circle fit
//!   ([`circle_center`], [`circle_radius`]).
//! * [`polyline`] - regression lines, closest distances, deviation profiles, parallelism and simplification.
//!
//! Turn angles use the [`AngleLookup`](lookup::AngleLookup) capability. By default it is a shared arc tangent table
//! built on first use, [`lookup::ExactAngle`] can be passed instead where accuracy matters more than speed.
//!
//! Degenerate geometry, such as coincident or collinear points, is never an error. It is reported through
//! `Option`, [`RegressionLine::Degenerate`](polyline::RegressionLine::Degenerate) or an infinite radius, and
//! logged at `trace` level through the [`log`] facade.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod circle;
pub mod distance;
pub mod lookup;
mod nearest;
pub mod polyline;
pub mod shape;
mod tunables;

pub use circle::{circle_center, circle_radius};
pub use distance::{
    great_circle_distance, haversine_distance, polyline_length, squared_euclidean_distance,
    EARTH_RADIUS,
};
pub use nearest::{
    perpendicular_distance, perpendicular_distance_to, perpendicular_distance_with, NearestPoint,
};
pub use polyline::{
    are_parallel, are_parallel_with, least_square_regression, least_square_regression_with,
    RegressionLine,
};
pub use shape::{bearing, compute_angle};
pub use tunables::{Tunables, PARALLEL_SLOPE_THRESHOLD, REGRESSION_EPSILON, REGRESSION_MARGIN};

// Reexport waygeom_types
pub use waygeom_types;
