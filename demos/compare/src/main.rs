//! compare — time Haversine, Vincenty, and SQL distance calculations.
//!
//! Runs every route × radius × formula case `--iterations` times, then the
//! SQLite-backed calculator per route, and prints the average and total wall
//! time of each case alongside its distance.
//!
//! ```text
//! RUST_LOG=info cargo run --release -p compare -- --iterations 10000
//! NB_ITERATIONS=500 DATABASE_PATH=geo.db cargo run -p compare
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use geodist_compare::{Backend, CompareConfig, DEFAULT_ITERATIONS, NamedRoute, run};
use geodist_core::{DistanceFormula, EarthRadius, Point, Route};
use geodist_sql::SqlCalculator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "NB_ITERATIONS", default_value_t = DEFAULT_ITERATIONS, help = "repetitions per case")]
    iterations: u32,

    #[arg(long, env = "DATABASE_PATH", help = "SQLite database file (default: in-memory)")]
    database: Option<PathBuf>,

    #[arg(long, help = "skip the SQL-backed calculator")]
    no_sql: bool,

    #[arg(long = "radius", value_name = "NAME", help = "radius model to sweep (mean, equatorial, polar); repeatable")]
    radii: Vec<EarthRadius>,

    #[arg(long = "formula", value_name = "NAME", help = "formula to time (haversine, vincenty); repeatable")]
    formulas: Vec<DistanceFormula>,

    #[arg(long, value_name = "LAT,LON", requires = "to", help = "start of an extra route")]
    from: Option<Point>,

    #[arg(long, value_name = "LAT,LON", requires = "from", help = "end of an extra route")]
    to: Option<Point>,
}

impl Args {
    fn to_config(&self) -> CompareConfig {
        let mut config = CompareConfig { iterations: self.iterations, ..CompareConfig::default() };
        if !self.radii.is_empty() {
            config.radii = self.radii.clone();
        }
        if !self.formulas.is_empty() {
            config.formulas = self.formulas.clone();
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            config.routes.push(NamedRoute::new("Custom", Route::new(from, to)));
        }
        config
    }

    fn open_sql(&self) -> Result<Option<SqlCalculator>> {
        if self.no_sql {
            return Ok(None);
        }
        let calc = match &self.database {
            Some(path) => SqlCalculator::open(path)
                .with_context(|| format!("failed to open database {}", path.display()))?,
            None => SqlCalculator::open_in_memory().context("failed to open in-memory database")?,
        };
        Ok(Some(calc))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.to_config();
    let sql = args.open_sql()?;

    let backends: Vec<Backend<'_>> = sql
        .iter()
        .map(|calc| Backend::new("SQL", calc))
        .collect();

    log::info!(
        "{} routes, {} radii, {} formulas, sql backend {}",
        config.routes.len(),
        config.radii.len(),
        config.formulas.len(),
        if sql.is_some() { "on" } else { "off" }
    );

    let comparison = run(&config, &backends)?;
    print!("{comparison}");

    Ok(())
}
