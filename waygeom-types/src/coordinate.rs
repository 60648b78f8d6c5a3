use std::fmt::{Display, Formatter};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::WaygeomTypesError;
use crate::geo::{GeoPoint, NewGeoPoint};

/// Number of fixed-point units in one degree.
pub const COORDINATE_PRECISION: f64 = 1e6;

const MAX_LON: i32 = 180_000_000;
const MAX_LAT: i32 = 90_000_000;

/// Converts a degree value into fixed-point units, rounding to the nearest unit.
///
/// Values that do not fit into `i32` saturate.
pub fn to_fixed(degrees: f64) -> i32 {
    (degrees * COORDINATE_PRECISION).round() as i32
}

/// Converts fixed-point units into degrees.
pub fn to_floating(fixed: i32) -> f64 {
    fixed as f64 / COORDINATE_PRECISION
}

/// Geographic coordinate stored as degrees scaled by [`COORDINATE_PRECISION`].
///
/// Equality and hashing are exact and only consider the fixed-point values. Use [`FloatCoordinate`] for
/// trigonometry.
///
/// ```
/// use waygeom_types::{Coordinate, FloatCoordinate};
///
/// let berlin = Coordinate::from_degrees(13.405, 52.52);
/// assert_eq!(berlin.fixed_lon(), 13_405_000);
/// assert_eq!(Coordinate::from(FloatCoordinate::from(berlin)), berlin);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Coordinate {
    lon: i32,
    lat: i32,
}

impl Coordinate {
    /// Sentinel value of a coordinate that was never set. Passing it to any geometry function is a programming
    /// error.
    pub const INVALID: Coordinate = Coordinate {
        lon: i32::MIN,
        lat: i32::MIN,
    };

    /// Creates a coordinate from fixed-point longitude and latitude.
    pub const fn new(lon: i32, lat: i32) -> Self {
        Self { lon, lat }
    }

    /// Creates a coordinate from degree values, rounding each axis to the nearest fixed-point unit.
    ///
    /// The range is not checked, so this can also hold difference vectors. Use [`Coordinate::try_from_degrees`]
    /// for untrusted input.
    pub fn from_degrees(lon: f64, lat: f64) -> Self {
        Self {
            lon: to_fixed(lon),
            lat: to_fixed(lat),
        }
    }

    /// Creates a coordinate from degree values, failing if they are outside of the valid range.
    pub fn try_from_degrees(lon: f64, lat: f64) -> Result<Self, WaygeomTypesError> {
        let coordinate = Self::from_degrees(lon, lat);
        if lon.is_finite() && lat.is_finite() && coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(WaygeomTypesError::InvalidCoordinate { lon, lat })
        }
    }

    /// Longitude in fixed-point units.
    pub fn fixed_lon(&self) -> i32 {
        self.lon
    }

    /// Latitude in fixed-point units.
    pub fn fixed_lat(&self) -> i32 {
        self.lat
    }

    /// Returns true if longitude is within `[-180, 180]` and latitude within `[-90, 90]` degrees.
    pub fn is_valid(&self) -> bool {
        (-MAX_LON..=MAX_LON).contains(&self.lon) && (-MAX_LAT..=MAX_LAT).contains(&self.lat)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.6},{:.6})",
            to_floating(self.lon),
            to_floating(self.lat)
        )
    }
}

impl GeoPoint for Coordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        to_floating(self.lat)
    }

    fn lon(&self) -> f64 {
        to_floating(self.lon)
    }
}

impl From<FloatCoordinate> for Coordinate {
    fn from(value: FloatCoordinate) -> Self {
        Self::from_degrees(value.lon, value.lat)
    }
}

/// Geographic coordinate in floating-point degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct FloatCoordinate {
    lon: f64,
    lat: f64,
}

impl FloatCoordinate {
    /// Creates a new coordinate from longitude and latitude in degrees.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns true if longitude is within `[-180, 180]` and latitude within `[-90, 90]` degrees.
    pub fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.lon) && (-90.0..=90.0).contains(&self.lat)
    }
}

impl GeoPoint for FloatCoordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for FloatCoordinate {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for FloatCoordinate {
    fn from(value: Coordinate) -> Self {
        Self {
            lon: to_floating(value.lon),
            lat: to_floating(value.lat),
        }
    }
}

impl AbsDiffEq for FloatCoordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}
