//! Percentile band labels carried by every reference curve

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five canonical percentile bands of a reference growth curve.
///
/// Every curve stores one value series per band, and the Gaussian fit in the
/// estimator pairs each band with a fixed standard-normal quantile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PercentileBand {
    #[serde(rename = "p5")]
    P5,
    #[serde(rename = "p25")]
    P25,
    #[serde(rename = "p50")]
    P50,
    #[serde(rename = "p75")]
    P75,
    #[serde(rename = "p95")]
    P95,
}

impl PercentileBand {
    /// All bands in ascending rank order.
    pub const ALL: [PercentileBand; 5] = [Self::P5, Self::P25, Self::P50, Self::P75, Self::P95];

    /// Wire label used by the reference JSON and downstream consumers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::P5 => "p5",
            Self::P25 => "p25",
            Self::P50 => "p50",
            Self::P75 => "p75",
            Self::P95 => "p95",
        }
    }

    /// Percentile rank of this band as a probability.
    pub fn rank(&self) -> f64 {
        match self {
            Self::P5 => 0.05,
            Self::P25 => 0.25,
            Self::P50 => 0.50,
            Self::P75 => 0.75,
            Self::P95 => 0.95,
        }
    }

    /// Standard-normal quantile for this band's rank.
    ///
    /// Fixed constants, never recomputed; the spread fit depends on these
    /// exact values pairing `z = 0` with the median band.
    pub fn z_score(&self) -> f64 {
        match self {
            Self::P5 => -1.6449,
            Self::P25 => -0.6745,
            Self::P50 => 0.0,
            Self::P75 => 0.6745,
            Self::P95 => 1.6449,
        }
    }
}

impl fmt::Display for PercentileBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
