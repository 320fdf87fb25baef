//! Geodesic distance on an oblate ellipsoid via Vincenty's inverse formula.
//!
//! The ellipsoid has the WGS-84 flattening and a semi-major axis equal to the
//! configured Earth radius.  The longitude on the auxiliary sphere (λ) is
//! refined until two successive values differ by at most
//! [`CONVERGENCE_TOLERANCE`] radians.
//!
//! # Iteration budget
//!
//! The budget is consumed *before* each λ update, and running it down to zero
//! is a failure.  A limit of `n` therefore allows at most `n - 1` updates; a
//! limit of `1` fails on every route that is not degenerate.  Nearly
//! antipodal routes typically exhaust any budget.

use std::f64::consts::PI;

use crate::radius::EQUATORIAL;
use crate::{DistanceCalculator, DistanceError, DistanceResult, Route};

/// WGS-84 flattening.
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Convergence threshold on successive λ values, in radians.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-12;

/// Iteration budget used by [`DistanceCalculator::calculate`].
pub const DEFAULT_ITERATION_LIMIT: i32 = 100;

/// Vincenty inverse-formula calculator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VincentyCalculator {
    /// Semi-major axis, metres.
    earth_radius: f64,
}

/// Auxiliary-sphere quantities from the latest λ update.  All zero if the
/// loop body never ran.
#[derive(Default)]
struct SigmaTerms {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

impl VincentyCalculator {
    /// `earth_radius` in metres is used as the semi-major axis.
    #[inline]
    pub fn new(earth_radius: f64) -> Self {
        Self { earth_radius }
    }

    #[inline]
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Semi-minor axis, `(1 - f) · a`.
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        (1.0 - EARTH_FLATTENING) * self.earth_radius
    }

    /// Distance in whole metres with an explicit iteration budget.
    ///
    /// # Errors
    ///
    /// - [`DistanceError::InvalidIterationLimit`] if `iteration_limit <= 0`,
    ///   checked before anything else.
    /// - [`DistanceError::ConvergenceFailure`] if λ has not settled when the
    ///   budget runs out.
    pub fn calculate_with_limit(&self, route: &Route, iteration_limit: i32) -> DistanceResult<i64> {
        if iteration_limit <= 0 {
            return Err(DistanceError::InvalidIterationLimit(iteration_limit));
        }

        if route.is_degenerate() {
            return Ok(0);
        }

        let a = self.earth_radius;
        let b = self.semi_minor_axis();
        let f = EARTH_FLATTENING;

        let (lat_from, lon_from) = route.start.to_radians();
        let (lat_to, lon_to) = route.end.to_radians();

        // Reduced latitudes.
        let u1 = ((1.0 - f) * lat_from.tan()).atan();
        let u2 = ((1.0 - f) * lat_to.tan()).atan();
        let l = lon_to - lon_from;

        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut lambda_prev = 2.0 * PI;
        let mut remaining = iteration_limit;
        let mut t = SigmaTerms::default();

        loop {
            // A NaN difference ends the loop, same as meeting the tolerance.
            let delta = (lambda - lambda_prev).abs();
            if delta <= CONVERGENCE_TOLERANCE || delta.is_nan() {
                break;
            }

            remaining -= 1;
            if remaining == 0 {
                log::warn!(
                    "vincenty: no convergence within {iteration_limit} iterations for {route} (|Δλ| = {delta:e})"
                );
                return Err(DistanceError::ConvergenceFailure { iteration_limit });
            }

            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
            t.sin_sigma = ((cos_u2 * sin_lambda) * (cos_u2 * sin_lambda) + cross * cross).sqrt();
            if t.sin_sigma == 0.0 {
                // Coincident once projected onto the auxiliary sphere.
                return Ok(0);
            }
            t.cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            t.sigma = t.sin_sigma.atan2(t.cos_sigma);

            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / t.sin_sigma;
            t.cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // Equatorial line: cos²α = 0.
            t.cos_2sigma_m = if t.cos_sq_alpha == 0.0 {
                0.0
            } else {
                t.cos_sigma - 2.0 * sin_u1 * sin_u2 / t.cos_sq_alpha
            };

            let c = f / 16.0 * t.cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * t.cos_sq_alpha));
            lambda_prev = lambda;
            lambda = l + (1.0 - c) * f * sin_alpha
                * (t.sigma + c * t.sin_sigma
                    * (t.cos_2sigma_m + c * t.cos_sigma * (-1.0 + 2.0 * t.cos_2sigma_m * t.cos_2sigma_m)));
        }

        log::debug!(
            "vincenty: converged after {} iterations for {route}",
            iteration_limit - remaining
        );

        let u_sq = t.cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let c2m = t.cos_2sigma_m;
        let delta_sigma = big_b * t.sin_sigma
            * (c2m + big_b / 4.0
                * (t.cos_sigma * (-1.0 + 2.0 * c2m * c2m)
                    - big_b / 6.0 * c2m * (-3.0 + 4.0 * t.sin_sigma * t.sin_sigma) * (-3.0 + 4.0 * c2m * c2m)));

        let distance = b * big_a * (t.sigma - delta_sigma);
        Ok(distance.round() as i64)
    }
}

impl Default for VincentyCalculator {
    fn default() -> Self {
        Self::new(EQUATORIAL)
    }
}

impl DistanceCalculator for VincentyCalculator {
    fn calculate(&self, route: &Route) -> DistanceResult<i64> {
        self.calculate_with_limit(route, DEFAULT_ITERATION_LIMIT)
    }
}
