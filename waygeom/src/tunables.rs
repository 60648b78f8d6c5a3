//! Configurable thresholds of the polyline analysis, with serde support for loading them from configuration.

use serde::{Deserialize, Serialize};

/// Largest absolute slope of the second regression line, after rotating the first one to horizontal, for which
/// two polylines are still considered parallel. A 10% grade.
pub const PARALLEL_SLOPE_THRESHOLD: f64 = 0.1;

/// Denominator threshold below which a regression fit is considered degenerate (vertical).
pub const REGRESSION_EPSILON: f64 = f64::EPSILON;

/// Distance in degrees by which the regression line extends beyond the longitude range of the fitted points.
pub const REGRESSION_MARGIN: f64 = 0.00001;

/// Thresholds used by the polyline analysis.
///
/// All fields fall back to their default value when missing from a deserialized configuration:
///
/// ```
/// use waygeom::Tunables;
///
/// let tunables: Tunables = serde_json::from_str(r#"{ "parallel_slope_threshold": 0.05 }"#).unwrap();
/// assert_eq!(tunables.parallel_slope_threshold, 0.05);
/// assert_eq!(tunables.regression_margin, Tunables::default().regression_margin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// See [`PARALLEL_SLOPE_THRESHOLD`].
    pub parallel_slope_threshold: f64,
    /// See [`REGRESSION_EPSILON`].
    pub regression_epsilon: f64,
    /// See [`REGRESSION_MARGIN`].
    pub regression_margin: f64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            parallel_slope_threshold: PARALLEL_SLOPE_THRESHOLD,
            regression_epsilon: REGRESSION_EPSILON,
            regression_margin: REGRESSION_MARGIN,
        }
    }
}
