//! Planar projections used for segment math.
mod identity;
mod web_mercator;

pub use identity::IdentityProjection;
pub use web_mercator::{WebMercator, MAX_LATITUDE};
