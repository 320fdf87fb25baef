//! `geodist-sql` — distance computed by a SQL engine instead of in process.
//!
//! [`SqlCalculator`] implements `geodist_core::DistanceCalculator`, so it can
//! be swapped for the Haversine or Vincenty calculators.  Unlike those it
//! performs I/O: every call may block and may fail with a [`SqlError`].
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`sqlite`]    | `SqlCalculator`                                        |
//! | [`functions`] | `register_functions` (`ST_DISTANCE_SPHERE`)            |
//! | [`error`]     | `SqlError`, `SqlResult<T>`                             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use geodist_sql::SqlCalculator;
//!
//! let calc = SqlCalculator::open(Path::new("geo.db"))?;
//! let meters = calc.distance(&route)?;
//! ```

pub mod error;
pub mod functions;
pub mod sqlite;


pub use error::{SqlError, SqlResult};
pub use functions::{DEFAULT_SPHERE_RADIUS_M, register_functions};
pub use sqlite::SqlCalculator;
