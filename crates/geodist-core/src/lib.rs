//! `geodist-core` — surface distance between geographic coordinates.
//!
//! This crate is a dependency of every other `geodist-*` crate.  It has no
//! `geodist-*` dependencies and minimal external ones (only `log` and
//! `thiserror`, plus optional `serde`).  Everything here is pure, synchronous
//! arithmetic on immutable values.
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`geo`]        | `Point`                                                 |
//! | [`route`]      | `Route`, `format_distance`                              |
//! | [`units`]      | `DistanceUnit`                                          |
//! | [`radius`]     | `EarthRadius` (mean / equatorial / polar)               |
//! | [`calculator`] | `DistanceCalculator` trait, `DistanceFormula`           |
//! | [`haversine`]  | `HaversineCalculator` (spherical, closed form)          |
//! | [`vincenty`]   | `VincentyCalculator` (WGS-84 ellipsoid, iterative)      |
//! | [`error`]      | `DistanceError`, `DistanceResult`                       |
//!
//! # Usage
//!
//! ```rust
//! use geodist_core::{DistanceCalculator, EarthRadius, HaversineCalculator, Point, Route};
//!
//! let route = Route::new(Point::new(50.63328, 3.02014), Point::new(50.64126, 3.04464));
//! let calc = HaversineCalculator::new(EarthRadius::Equatorial.meters());
//! let meters = calc.calculate(&route).unwrap();
//! assert_eq!(Route::human_readable_distance(meters), format!("{meters}m"));
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod calculator;
pub mod error;
pub mod geo;
pub mod haversine;
pub mod radius;
pub mod route;
pub mod units;
pub mod vincenty;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calculator::{DistanceCalculator, DistanceFormula};
pub use error::{DistanceError, DistanceResult};
pub use geo::Point;
pub use haversine::HaversineCalculator;
pub use radius::EarthRadius;
pub use route::{Route, format_distance};
pub use units::DistanceUnit;
pub use vincenty::VincentyCalculator;
