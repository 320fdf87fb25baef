//! SQLite-backed distance calculator.
//!
//! Every call is a round trip through the SQL engine: the route's coordinates
//! are bound as named parameters to a single `ST_DISTANCE_SPHERE` query.
//! The engine's `REAL` answer is truncated toward zero to whole metres.

use std::path::Path;

use geodist_core::{DistanceCalculator, DistanceResult, Route};
use rusqlite::{Connection, named_params};

use crate::functions::register_functions;
use crate::{SqlError, SqlResult};

const DISTANCE_SQL: &str =
    "SELECT ST_DISTANCE_SPHERE(:lon_from, :lat_from, :lon_to, :lat_to) AS distance";

/// Computes distances by querying a SQLite connection.
pub struct SqlCalculator {
    conn: Connection,
}

impl SqlCalculator {
    /// Wrap an existing connection, installing the SQL functions on it.
    pub fn new(conn: Connection) -> SqlResult<Self> {
        register_functions(&conn).map_err(SqlError::Connection)?;
        Ok(Self { conn })
    }

    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> SqlResult<Self> {
        log::info!("opening sqlite database {}", path.display());
        let conn = Connection::open(path).map_err(SqlError::Connection)?;
        Self::new(conn)
    }

    /// Private in-memory database.
    pub fn open_in_memory() -> SqlResult<Self> {
        let conn = Connection::open_in_memory().map_err(SqlError::Connection)?;
        Self::new(conn)
    }

    /// The wrapped connection, with the SQL functions installed.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Distance in whole metres as computed by the database.
    pub fn distance(&self, route: &Route) -> SqlResult<i64> {
        let mut stmt = self.conn.prepare_cached(DISTANCE_SQL).map_err(SqlError::Query)?;
        let distance: Option<f64> = stmt
            .query_row(
                named_params! {
                    ":lon_from": route.start.longitude,
                    ":lat_from": route.start.latitude,
                    ":lon_to":   route.end.longitude,
                    ":lat_to":   route.end.latitude,
                },
                |row| row.get(0),
            )
            .map_err(SqlError::Query)?;

        let distance = distance.ok_or(SqlError::NullDistance)?;
        log::trace!("sql distance for {route}: {distance}");
        Ok(distance as i64)
    }
}

impl DistanceCalculator for SqlCalculator {
    fn calculate(&self, route: &Route) -> DistanceResult<i64> {
        Ok(self.distance(route)?)
    }
}
