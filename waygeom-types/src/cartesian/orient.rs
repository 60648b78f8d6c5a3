use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Orientation of a triangle from its signed area (positive for counterclockwise order with `y` pointing up).
    pub fn from_signed_area(area: f64) -> Self {
        if area > 0.0 {
            Self::Counterclockwise
        } else if area < 0.0 {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}
