//! Plain-text rendering of a [`Comparison`].
//!
//! ```text
//! Results for 1000 iterations :
//!
//! Haversine mean radius for Euratech => Citadelle:
//!   - Distance: 1942m
//!   - Average time: 0.412 microseconds
//!   - Total time: 0.000 seconds
//! ```

use std::fmt;

use crate::{CaseResult, Comparison};

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for {} iterations :", self.iterations)?;
        writeln!(f)?;
        for case in &self.cases {
            write!(f, "{case}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg_us = self.average().as_secs_f64() * 1e6;
        writeln!(f, "{}:", self.label)?;
        writeln!(f, "  - Distance: {}", self.distance)?;
        writeln!(f, "  - Average time: {avg_us:.3} microseconds")?;
        writeln!(f, "  - Total time: {:.3} seconds", self.total.as_secs_f64())
    }
}
