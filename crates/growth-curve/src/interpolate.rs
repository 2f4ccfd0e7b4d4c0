//! Age-based linear interpolation over reference samples
//!
//! Reference curves are sampled at a handful of discrete ages; a subject's
//! age almost never lands on a sample, so each band is linearly blended
//! between its two bracketing samples. Outside the sampled age range the
//! boundary sample is returned as-is: clamping, not extrapolation, so the
//! engine never projects beyond the observed reference range.

use crate::band::PercentileBand;
use growth_core::{Error, Result};

/// Reference band values interpolated at one query age.
///
/// Ephemeral, produced per (region, subject) pair by
/// [`ReferenceCurve::sample_at`](crate::ReferenceCurve::sample_at).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedPoint {
    /// Age the curve was sampled at.
    pub query_age: f64,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

impl InterpolatedPoint {
    pub fn new(query_age: f64, p5: f64, p25: f64, p50: f64, p75: f64, p95: f64) -> Self {
        Self {
            query_age,
            p5,
            p25,
            p50,
            p75,
            p95,
        }
    }

    /// Value of one band at the query age.
    pub fn band(&self, band: PercentileBand) -> f64 {
        match band {
            PercentileBand::P5 => self.p5,
            PercentileBand::P25 => self.p25,
            PercentileBand::P50 => self.p50,
            PercentileBand::P75 => self.p75,
            PercentileBand::P95 => self.p95,
        }
    }

    /// All band values in ascending rank order.
    pub fn values(&self) -> [f64; 5] {
        [self.p5, self.p25, self.p50, self.p75, self.p95]
    }
}

/// Linearly interpolate `values` along `ages` at `query_age`.
///
/// `ages` must be sorted ascending (ties permitted) and index-aligned with
/// `values`; malformed input is rejected loudly rather than silently
/// producing nonsense. Queries at or beyond either boundary clamp to the
/// boundary sample.
pub fn interpolate(query_age: f64, ages: &[f64], values: &[f64]) -> Result<f64> {
    if ages.is_empty() {
        return Err(Error::empty_input("interpolation"));
    }
    if ages.len() != values.len() {
        return Err(Error::size_mismatch(
            ages.len(),
            values.len(),
            "interpolation values",
        ));
    }

    let last = ages.len() - 1;
    if query_age <= ages[0] {
        return Ok(values[0]);
    }
    if query_age >= ages[last] {
        return Ok(values[last]);
    }

    // First sample at or above the query. Curves carry few samples, so a
    // forward scan beats a binary search in practice.
    let mut i = 1;
    while ages[i] < query_age {
        i += 1;
    }

    let (a0, a1) = (ages[i - 1], ages[i]);
    if a0 == a1 {
        // Zero-width interval from duplicate age samples: nothing to blend.
        return Ok(values[i - 1]);
    }

    Ok(values[i - 1] + (query_age - a0) / (a1 - a0) * (values[i] - values[i - 1]))
}
