//! Geographic coordinate type.
//!
//! `Point` stores latitude/longitude in degrees as `f64`.  No range checks
//! are applied: out-of-range values are kept as given and flow through the
//! calculators unchanged.

use std::str::FromStr;

use crate::DistanceError;

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Exact (bitwise-value) coordinate equality, used for the zero-distance
    /// shortcut.  Two points that differ by one ulp are *not* coincident here.
    #[inline]
    pub fn coincides_with(self, other: Point) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }

    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// `(latitude, longitude)`.
impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// `[latitude, longitude]`.
impl From<[f64; 2]> for Point {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Parses `"lat,lon"` (whitespace around either value is ignored).
impl FromStr for Point {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DistanceError::ParsePoint(s.to_owned());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self::new(latitude, longitude))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
