//! Run configuration and the built-in fixture routes.

use geodist_core::{DistanceFormula, EarthRadius, Point, Route};

/// Iterations per case when nothing else is configured.
pub const DEFAULT_ITERATIONS: u32 = 1_000;

/// A route with the label it is reported under.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRoute {
    pub name: String,
    pub route: Route,
}

impl NamedRoute {
    pub fn new(name: impl Into<String>, route: Route) -> Self {
        Self { name: name.into(), route }
    }
}

/// Two French routes: a short hop across Lille and a cross-country one.
pub fn fixture_routes() -> Vec<NamedRoute> {
    let euratech = Point::new(50.63328, 3.02014);
    let citadelle = Point::new(50.64126, 3.04464);
    let biarritz = Point::new(43.48997, -1.50331);
    let strasbourg = Point::new(48.58754, 7.74420);

    vec![
        NamedRoute::new("Euratech => Citadelle", Route::new(euratech, citadelle)),
        NamedRoute::new("Biarritz => Strasbourg", Route::new(biarritz, strasbourg)),
    ]
}

/// What to compare and how many times.
#[derive(Clone, Debug)]
pub struct CompareConfig {
    /// Times every case is repeated.  Averages are taken over this count.
    pub iterations: u32,

    /// Radius models swept for each in-process formula.  Default: all three.
    pub radii: Vec<EarthRadius>,

    /// In-process formulas to time.  Default: Haversine and Vincenty.
    pub formulas: Vec<DistanceFormula>,

    /// Routes to measure, in report order.
    pub routes: Vec<NamedRoute>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            radii: EarthRadius::ALL.to_vec(),
            formulas: DistanceFormula::ALL.to_vec(),
            routes: fixture_routes(),
        }
    }
}
