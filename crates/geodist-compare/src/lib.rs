//! `geodist-compare` — benchmark distance calculators against each other.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`config`]  | `CompareConfig`, `NamedRoute`, `fixture_routes`             |
//! | [`harness`] | `run`, `Backend`, `Comparison`, `CaseResult`                |
//! | [`report`]  | `Display` impls rendering the console report                |
//! | [`error`]   | `CompareError`, `CompareResult<T>`                          |
//!
//! In-process formulas are driven by [`CompareConfig`]; anything else that
//! implements `geodist_core::DistanceCalculator` (such as the SQL-backed
//! calculator) is passed in as a [`Backend`].

pub mod config;
pub mod error;
pub mod harness;
pub mod report;


pub use config::{CompareConfig, DEFAULT_ITERATIONS, NamedRoute, fixture_routes};
pub use error::{CompareError, CompareResult};
pub use harness::{Backend, CaseResult, Comparison, run};
