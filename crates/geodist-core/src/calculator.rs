//! The distance-calculator capability and the formula selector.
//!
//! # Pluggability
//!
//! Callers compute distances through the [`DistanceCalculator`] trait, so the
//! in-process calculators ([`HaversineCalculator`], [`VincentyCalculator`])
//! and out-of-process ones (the SQL-backed calculator in `geodist-sql`) are
//! interchangeable.  Construction is not part of the trait: the in-process
//! calculators take an Earth radius, a database-backed one takes a connection.

use std::str::FromStr;

use crate::{DistanceError, DistanceResult, HaversineCalculator, Route, VincentyCalculator};

// ── DistanceCalculator trait ──────────────────────────────────────────────────

/// Something that turns a [`Route`] into a distance in whole metres.
///
/// Implementations must return a non-negative value rounded to the nearest
/// metre, and exactly `0` for a route whose endpoints coincide.
pub trait DistanceCalculator {
    /// Distance from `route.start` to `route.end`, in metres.
    fn calculate(&self, route: &Route) -> DistanceResult<i64>;
}

impl<C: DistanceCalculator + ?Sized> DistanceCalculator for &C {
    fn calculate(&self, route: &Route) -> DistanceResult<i64> {
        (**self).calculate(route)
    }
}

impl<C: DistanceCalculator + ?Sized> DistanceCalculator for Box<C> {
    fn calculate(&self, route: &Route) -> DistanceResult<i64> {
        (**self).calculate(route)
    }
}

// ── DistanceFormula ───────────────────────────────────────────────────────────

/// The in-process algorithms, selectable by name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceFormula {
    /// Closed-form great circle on a sphere.
    Haversine,
    /// Iterative geodesic on the WGS-84 ellipsoid.
    Vincenty,
}

impl DistanceFormula {
    pub const ALL: [DistanceFormula; 2] = [DistanceFormula::Haversine, DistanceFormula::Vincenty];

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceFormula::Haversine => "haversine",
            DistanceFormula::Vincenty  => "vincenty",
        }
    }

    /// Capitalised name for report labels ("Haversine", "Vincenty").
    pub fn title(self) -> &'static str {
        match self {
            DistanceFormula::Haversine => "Haversine",
            DistanceFormula::Vincenty  => "Vincenty",
        }
    }

    /// Build a calculator for this formula with the given radius in metres.
    pub fn calculator(self, earth_radius: f64) -> Box<dyn DistanceCalculator + Send + Sync> {
        match self {
            DistanceFormula::Haversine => Box::new(HaversineCalculator::new(earth_radius)),
            DistanceFormula::Vincenty  => Box::new(VincentyCalculator::new(earth_radius)),
        }
    }
}

impl FromStr for DistanceFormula {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DistanceError::ParseFormula(s.to_owned()))
    }
}

impl std::fmt::Display for DistanceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
