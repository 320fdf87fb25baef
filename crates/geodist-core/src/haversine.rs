//! Great-circle distance on a sphere.
//!
//! Fast, closed form, and total over all finite inputs.  Ignores the Earth's
//! flattening, so it drifts by a few tenths of a percent from the ellipsoidal
//! result at mid latitudes.

use crate::radius::EQUATORIAL;
use crate::{DistanceCalculator, DistanceResult, Route};

/// Haversine calculator over a sphere of the configured radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HaversineCalculator {
    earth_radius: f64,
}

impl HaversineCalculator {
    /// `earth_radius` in metres; see [`EarthRadius`](crate::EarthRadius).
    #[inline]
    pub fn new(earth_radius: f64) -> Self {
        Self { earth_radius }
    }

    #[inline]
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Distance in whole metres.  Never fails.
    pub fn distance(&self, route: &Route) -> i64 {
        if route.is_degenerate() {
            return 0;
        }

        let (lat_from, lon_from) = route.start.to_radians();
        let (lat_to, lon_to) = route.end.to_radians();

        let d_lat = lat_to - lat_from;
        let d_lon = lon_to - lon_from;

        // `a` can land a hair outside [0, 1] near antipodes; left unclamped.
        let a = (d_lat * 0.5).sin().powi(2)
            + lat_from.cos() * lat_to.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        (self.earth_radius * c).round() as i64
    }
}

impl Default for HaversineCalculator {
    fn default() -> Self {
        Self::new(EQUATORIAL)
    }
}

impl DistanceCalculator for HaversineCalculator {
    fn calculate(&self, route: &Route) -> DistanceResult<i64> {
        Ok(self.distance(route))
    }
}
