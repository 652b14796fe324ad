//! Geographic coordinate type.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Coordinates
//! come out of attribute tables as doubles and go into the KML document as
//! full decimal degrees, so there is no narrower representation anywhere in
//! the pipeline.

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components are finite numbers (not NaN or infinite).
    ///
    /// Range is deliberately not checked: attribute tables in the wild carry
    /// projected or otherwise out-of-range coordinates, and the viewer copes.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
