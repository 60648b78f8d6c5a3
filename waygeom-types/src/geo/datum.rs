/// Reference ellipsoid that a projection scales its coordinates by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Creates a sphere datum with the given radius in metres.
    pub const fn sphere(radius: f64) -> Self {
        Self { semimajor: radius }
    }

    /// Semimajor axis in metres.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
