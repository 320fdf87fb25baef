//! The timing loop.
//!
//! # Case order
//!
//! For every route: each configured radius × each configured formula, then
//! each external backend.  The same order is used in the report.
//!
//! # What is timed
//!
//! For in-process formulas a fresh calculator is built inside the timed
//! region, so construction cost is included.  External backends are built
//! once by the caller and only the query plus formatting is timed.

use std::time::{Duration, Instant};

use geodist_core::{DistanceCalculator, DistanceFormula, EarthRadius, Route, format_distance};

use crate::{CompareConfig, CompareError, CompareResult};

// ── Inputs ────────────────────────────────────────────────────────────────────

/// A calculator supplied by the caller, reported as `"<name> for <route>"`.
#[derive(Clone, Copy)]
pub struct Backend<'a> {
    pub name: &'a str,
    pub calculator: &'a dyn DistanceCalculator,
}

impl<'a> Backend<'a> {
    pub fn new(name: &'a str, calculator: &'a dyn DistanceCalculator) -> Self {
        Self { name, calculator }
    }
}

enum Strategy<'a> {
    Formula { formula: DistanceFormula, radius: EarthRadius },
    Backend(&'a dyn DistanceCalculator),
}

struct Case<'a> {
    label: String,
    route: Route,
    strategy: Strategy<'a>,
}

impl Case<'_> {
    /// One timed evaluation: the rendered distance and the time it took.
    fn run_once(&self) -> CompareResult<(String, Duration)> {
        let t0 = Instant::now();
        let meters = match &self.strategy {
            Strategy::Formula { formula, radius } => {
                formula.calculator(radius.meters()).calculate(&self.route)
            }
            Strategy::Backend(calc) => calc.calculate(&self.route),
        }
        .map_err(|source| CompareError::Case { label: self.label.clone(), source })?;
        let rendered = format_distance(meters);
        Ok((rendered, t0.elapsed()))
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// Aggregated timings for one labelled case.
#[derive(Clone, Debug)]
pub struct CaseResult {
    pub label: String,
    /// Human-readable distance from the last iteration.
    pub distance: String,
    pub total: Duration,
    pub iterations: u32,
}

impl CaseResult {
    /// Mean wall time per iteration.
    pub fn average(&self) -> Duration {
        self.total / self.iterations
    }
}

/// Every case of a finished run, in case order.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub iterations: u32,
    pub cases: Vec<CaseResult>,
}

impl Comparison {
    pub fn case(&self, label: &str) -> Option<&CaseResult> {
        self.cases.iter().find(|c| c.label == label)
    }
}

// ── Runner ────────────────────────────────────────────────────────────────────

/// Time every case `config.iterations` times.
///
/// Stops at the first calculator error (e.g. a Vincenty convergence failure
/// or a database error) and returns it tagged with the case label.
pub fn run(config: &CompareConfig, backends: &[Backend<'_>]) -> CompareResult<Comparison> {
    if config.iterations == 0 {
        return Err(CompareError::NoIterations);
    }

    let cases = build_cases(config, backends);
    log::info!(
        "comparing {} cases over {} routes, {} iterations each",
        cases.len(),
        config.routes.len(),
        config.iterations
    );

    let mut totals = vec![Duration::ZERO; cases.len()];
    let mut distances = vec![String::new(); cases.len()];

    for iteration in 0..config.iterations {
        for (i, case) in cases.iter().enumerate() {
            let (rendered, elapsed) = case.run_once()?;
            totals[i] += elapsed;
            distances[i] = rendered;
        }
        log::trace!("iteration {} done", iteration + 1);
    }

    let cases = cases
        .into_iter()
        .zip(totals)
        .zip(distances)
        .map(|((case, total), distance)| CaseResult {
            label: case.label,
            distance,
            total,
            iterations: config.iterations,
        })
        .collect();

    Ok(Comparison { iterations: config.iterations, cases })
}

fn build_cases<'a>(config: &CompareConfig, backends: &[Backend<'a>]) -> Vec<Case<'a>> {
    let mut cases = Vec::new();
    for named in &config.routes {
        for &radius in &config.radii {
            for &formula in &config.formulas {
                cases.push(Case {
                    label: format!("{} {radius} radius for {}", formula.title(), named.name),
                    route: named.route,
                    strategy: Strategy::Formula { formula, radius },
                });
            }
        }
        for backend in backends {
            cases.push(Case {
                label: format!("{} for {}", backend.name, named.name),
                route: named.route,
                strategy: Strategy::Backend(backend.calculator),
            });
        }
    }
    cases
}
