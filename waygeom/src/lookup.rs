//! Arc tangent capability used by the turn angle computation.
//!
//! [`Atan2Table`] trades a little accuracy for speed and is shared process-wide through [`atan2_table`].
//! [`ExactAngle`] is the reference implementation with the same sign and branch conventions as [`f64::atan2`].

use std::f64::consts::{FRAC_PI_2, PI};

use lazy_static::lazy_static;

/// Number of entries in the arc tangent table.
pub const ATAN2_TABLE_SIZE: usize = 4096;

/// Computes the angle of the vector `(x, y)` in radians in the range `[-PI, PI]`.
pub trait AngleLookup {
    /// Arc tangent of `y / x` using the signs of both arguments to select the quadrant.
    fn atan2(&self, y: f64, x: f64) -> f64;
}

/// Exact arc tangent from the standard library.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactAngle;

impl AngleLookup for ExactAngle {
    fn atan2(&self, y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
}

/// Table based arc tangent.
///
/// The table holds `atan(t)` for `t` in `[0, 1]`. Other arguments are folded into the first octant and the result
/// unfolded afterwards. Values between table entries are interpolated linearly, which keeps the error below `1e-7`
/// radians.
#[derive(Debug, Clone)]
pub struct Atan2Table {
    values: Box<[f64]>,
}

impl Atan2Table {
    /// Builds the table.
    pub fn new() -> Self {
        let last = (ATAN2_TABLE_SIZE - 1) as f64;
        let values = (0..ATAN2_TABLE_SIZE)
            .map(|i| (i as f64 / last).atan())
            .collect();

        log::debug!("Built arc tangent table with {ATAN2_TABLE_SIZE} entries");
        Self { values }
    }

    fn first_octant(&self, t: f64) -> f64 {
        let position = t * (ATAN2_TABLE_SIZE - 1) as f64;
        let index = (position as usize).min(ATAN2_TABLE_SIZE - 2);
        let fraction = position - index as f64;

        self.values[index] + (self.values[index + 1] - self.values[index]) * fraction
    }
}

impl Default for Atan2Table {
    fn default() -> Self {
        Self::new()
    }
}

impl AngleLookup for Atan2Table {
    fn atan2(&self, y: f64, x: f64) -> f64 {
        let (ax, ay) = (x.abs(), y.abs());

        let base = if ax == 0.0 && ay == 0.0 {
            0.0
        } else if ay <= ax {
            self.first_octant(ay / ax)
        } else {
            FRAC_PI_2 - self.first_octant(ax / ay)
        };

        let angle = if x.is_sign_negative() { PI - base } else { base };
        if y.is_sign_negative() {
            -angle
        } else {
            angle
        }
    }
}

lazy_static! {
    static ref ATAN2_TABLE: Atan2Table = Atan2Table::new();
}

/// Shared arc tangent table. Built on first use and never modified afterwards.
pub fn atan2_table() -> &'static Atan2Table {
    &ATAN2_TABLE
}
