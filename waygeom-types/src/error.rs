//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WaygeomTypesError {
    /// Degree values outside of the valid longitude/latitude range.
    #[error("invalid coordinate: lon {lon}, lat {lat}")]
    InvalidCoordinate {
        /// Longitude in degrees.
        lon: f64,
        /// Latitude in degrees.
        lat: f64,
    },
}
