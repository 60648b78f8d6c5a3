//! Geographic point traits (see [`GeoPoint`]) and conversion between geographic coordinates and a projected plane
//! (see [`Projection`]).

mod datum;
pub mod impls;
mod traits;

pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
