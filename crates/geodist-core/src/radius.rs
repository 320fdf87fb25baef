//! Earth radius models.
//!
//! Three fixed values parameterise both calculators.  For Vincenty the chosen
//! value is used as the ellipsoid's semi-major axis.
//!
//! | Model        | Metres        | Source                       |
//! |--------------|---------------|------------------------------|
//! | `Mean`       | 6 371 000     | IUGG mean radius             |
//! | `Equatorial` | 6 378 137     | WGS-84 semi-major axis       |
//! | `Polar`      | 6 356 752.3142| WGS-84 semi-minor axis       |

use std::str::FromStr;

use crate::DistanceError;

pub const MEAN: f64 = 6_371_000.0;
pub const EQUATORIAL: f64 = 6_378_137.0;
pub const POLAR: f64 = 6_356_752.3142;

/// A named Earth radius.  `Equatorial` is the default for both calculators.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EarthRadius {
    Mean,
    #[default]
    Equatorial,
    Polar,
}

impl EarthRadius {
    /// Every model, in sweep order.
    pub const ALL: [EarthRadius; 3] = [EarthRadius::Mean, EarthRadius::Equatorial, EarthRadius::Polar];

    /// Radius in metres.
    #[inline]
    pub fn meters(self) -> f64 {
        match self {
            EarthRadius::Mean       => MEAN,
            EarthRadius::Equatorial => EQUATORIAL,
            EarthRadius::Polar      => POLAR,
        }
    }

    /// Lower-case name, as used in reports and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            EarthRadius::Mean       => "mean",
            EarthRadius::Equatorial => "equatorial",
            EarthRadius::Polar      => "polar",
        }
    }

    /// `(name, metres)` for every model, in the order mean, equatorial, polar.
    pub fn values() -> impl Iterator<Item = (&'static str, f64)> {
        Self::ALL.into_iter().map(|r| (r.name(), r.meters()))
    }
}

impl FromStr for EarthRadius {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DistanceError::ParseRadius(s.to_owned()))
    }
}

impl std::fmt::Display for EarthRadius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
