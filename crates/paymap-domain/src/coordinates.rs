//! Latitude/longitude pair with bounds checking

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair for a terminal location or a map jump target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Parse a `"lat,lng"` pair, rejecting out-of-bounds values.
    ///
    /// # Examples
    /// ```
    /// use paymap_domain::Coordinates;
    /// assert_eq!(
    ///     Coordinates::parse("40.7128", "-74.0060"),
    ///     Some(Coordinates { lat: 40.7128, lng: -74.006 })
    /// );
    /// assert_eq!(Coordinates::parse("91.0", "200.0"), None);
    /// ```
    pub fn parse(lat: &str, lng: &str) -> Option<Self> {
        let lat: f64 = lat.trim().parse().ok()?;
        let lng: f64 = lng.trim().parse().ok()?;
        let coords = Self { lat, lng };
        if coords.is_valid() {
            Some(coords)
        } else {
            None
        }
    }
}
