//! Gaussian fit-and-invert percentile estimation
//!
//! Five interpolated reference bands pin down a normal model: the median
//! band is taken as the mean outright (the most robust central estimate
//! available from the bands), and a single scale parameter is fitted by
//! least squares through the origin on (z, value - mu) pairs. The observed
//! measurement is then standardized against that model and mapped through
//! the normal CDF to a percentile rank.

use growth_core::standard_normal_cdf;
use growth_curve::{InterpolatedPoint, PercentileBand};

/// Normal model fitted to the five reference bands at one age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianFit {
    /// Mean; the median band verbatim.
    pub mu: f64,
    /// Scale; least-squares slope of band deltas against band z-scores.
    pub sigma: f64,
}

impl GaussianFit {
    /// Fit from raw band values in ascending rank order.
    ///
    /// The slope denominator `sum(z^2)` is a fixed positive constant of the
    /// band z-scores, so the fit itself cannot divide by zero; a flat curve
    /// simply yields `sigma == 0`, handled in [`percentile_of`](Self::percentile_of).
    pub fn from_bands(p5: f64, p25: f64, p50: f64, p75: f64, p95: f64) -> Self {
        let mu = p50;
        let values = [p5, p25, p50, p75, p95];

        let mut sum_z_delta = 0.0;
        let mut sum_z_squared = 0.0;
        for (band, value) in PercentileBand::ALL.iter().zip(values) {
            let z = band.z_score();
            sum_z_delta += z * (value - mu);
            sum_z_squared += z * z;
        }

        Self {
            mu,
            sigma: sum_z_delta / sum_z_squared,
        }
    }

    /// Fit from an interpolated curve sample.
    pub fn fit(point: &InterpolatedPoint) -> Self {
        Self::from_bands(point.p5, point.p25, point.p50, point.p75, point.p95)
    }

    /// Percentile rank of `value` under the fitted model, nominally 0-100.
    ///
    /// Deliberately unclamped: extreme observations map outside [0, 100] so
    /// the magnitude of the extremity stays visible, and the caller decides
    /// whether to clamp for display. A flat reference curve has no defined
    /// spread; the value then sits at the median and 50 is returned instead
    /// of propagating NaN/Inf.
    pub fn percentile_of(&self, value: f64) -> f64 {
        if self.sigma == 0.0 {
            return 50.0;
        }
        let z = (value - self.mu) / self.sigma;
        standard_normal_cdf(z) * 100.0
    }
}

/// Estimate the percentile rank of `input` against five reference band
/// values. Convenience wrapper over [`GaussianFit`].
pub fn estimate_percentile(input: f64, p5: f64, p25: f64, p50: f64, p75: f64, p95: f64) -> f64 {
    GaussianFit::from_bands(p5, p25, p50, p75, p95).percentile_of(input)
}
