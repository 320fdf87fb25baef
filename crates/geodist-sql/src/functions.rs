//! Spherical-distance SQL function.
//!
//! SQLite has no geometry functions of its own, so [`register_functions`]
//! installs `ST_DISTANCE_SPHERE` with the semantics of the MySQL built-in:
//!
//! ```sql
//! ST_DISTANCE_SPHERE(lon1, lat1, lon2, lat2)          -- default sphere
//! ST_DISTANCE_SPHERE(lon1, lat1, lon2, lat2, radius)  -- explicit radius
//! ```
//!
//! Coordinates are longitude first and must lie in `[-180, 180]` /
//! `[-90, 90]`; out-of-range values and a non-positive radius raise an SQL
//! error.  Any NULL argument yields NULL.  The result is a `REAL` in metres.

use rusqlite::Connection;
use rusqlite::functions::{Context, FunctionFlags};

/// Sphere radius used when none is passed, in metres (the MySQL default).
pub const DEFAULT_SPHERE_RADIUS_M: f64 = 6_370_986.0;

/// Name of the registered function.
pub const ST_DISTANCE_SPHERE: &str = "ST_DISTANCE_SPHERE";

/// Install the spherical-distance function on `conn` (4- and 5-argument forms).
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;
    conn.create_scalar_function(ST_DISTANCE_SPHERE, 4, flags, st_distance_sphere)?;
    conn.create_scalar_function(ST_DISTANCE_SPHERE, 5, flags, st_distance_sphere)?;
    log::debug!("registered {ST_DISTANCE_SPHERE} on sqlite connection");
    Ok(())
}

fn st_distance_sphere(ctx: &Context<'_>) -> rusqlite::Result<Option<f64>> {
    let mut args = [0.0f64; 4];
    for (i, slot) in args.iter_mut().enumerate() {
        match ctx.get::<Option<f64>>(i)? {
            Some(v) => *slot = v,
            None => return Ok(None),
        }
    }
    let radius = if ctx.len() > 4 {
        match ctx.get::<Option<f64>>(4)? {
            Some(r) => r,
            None => return Ok(None),
        }
    } else {
        DEFAULT_SPHERE_RADIUS_M
    };

    let [lon1, lat1, lon2, lat2] = args;
    for lon in [lon1, lon2] {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(user_error(format!("longitude {lon} is out of range [-180, 180]")));
        }
    }
    for lat in [lat1, lat2] {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(user_error(format!("latitude {lat} is out of range [-90, 90]")));
        }
    }
    if radius <= 0.0 || radius.is_nan() {
        return Err(user_error(format!("radius must be positive (got {radius})")));
    }

    Ok(Some(sphere_distance(lon1, lat1, lon2, lat2, radius)))
}

/// Haversine in the arcsine form.
fn sphere_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64, radius: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = phi2 - phi1;
    let d_lambda = (lon2 - lon1).to_radians();

    let h = (d_phi * 0.5).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);
    2.0 * radius * h.sqrt().min(1.0).asin()
}

fn user_error(msg: String) -> rusqlite::Error {
    rusqlite::Error::UserFunctionError(msg.into())
}
