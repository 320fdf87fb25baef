//! Routes between two points and human-readable distance rendering.

use crate::{DistanceUnit, Point};

/// Distances at or above this many metres are rendered in kilometres.
const KILOMETER_THRESHOLD_M: i64 = 10_000;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The input of every distance query: an ordered `(start, end)` pair.
///
/// Both endpoints are held by value; a `Route` carries no state beyond them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub start: Point,
    pub end: Point,
}

impl Route {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The same route travelled in the opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        Self { start: self.end, end: self.start }
    }

    /// `true` if both endpoints have exactly equal coordinates.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start.coincides_with(self.end)
    }

    /// Render a distance in metres for display.  See [`format_distance`].
    pub fn human_readable_distance(meters: i64) -> String {
        format_distance(meters)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.start, self.end)
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Render `meters` as `"<N>m"` below 10 km, otherwise as kilometres rounded
/// to three decimals with trailing zeros dropped (`10000` → `"10km"`,
/// `1234567` → `"1234.567km"`).
pub fn format_distance(meters: i64) -> String {
    if meters < KILOMETER_THRESHOLD_M {
        return format!("{meters}{}", DistanceUnit::Meters);
    }

    let km = round_to(meters as f64 / 1000.0, 3);
    format!("{km}{}", DistanceUnit::Kilometers)
}

/// Round half away from zero to `decimals` places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
