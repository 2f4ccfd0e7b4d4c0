//! Standard-normal primitives shared by the percentile engine
//!
//! The percentile inversion only needs the forward CDF, so a compact
//! rational approximation of `erf` is enough; no distribution objects are
//! constructed on the hot path.

/// Abramowitz & Stegun 7.1.26 coefficients.
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Error function via the Abramowitz & Stegun 7.1.26 rational approximation.
///
/// Absolute error is bounded by ~1.5e-7 over the whole real line, which is
/// well inside percentile-reporting precision.
pub fn erf(x: f64) -> f64 {
    // The rational form leaves a ~1e-9 residue at the origin; the median
    // must map to exactly 0.5, so pin it.
    if x == 0.0 {
        return 0.0;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Standard normal CDF: probability mass below `z`.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}
