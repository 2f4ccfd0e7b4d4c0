//! Growth-curve percentile estimation toolkit
//!
//! Estimates where a single measured anatomical volume at a given
//! post-menstrual age falls relative to a population growth-curve reference,
//! for each of many anatomical regions. Two composed pure stages:
//!
//! - **Curve interpolation** ([`growth_curve`]): blend the five reference
//!   percentile bands (p5/p25/p50/p75/p95) linearly at the subject's age,
//!   clamping outside the sampled age range.
//! - **Percentile estimation** ([`growth_percentile`]): fit a Gaussian to the
//!   interpolated bands (median as mean, least-squares spread) and invert the
//!   observed measurement through the normal CDF into a percentile rank.
//!
//! # Examples
//!
//! ```
//! use growth_stats::{estimate_regions, CurveSet, ReferenceCurve};
//! use std::collections::HashMap;
//!
//! let mut curves = CurveSet::new();
//! curves.insert(
//!     "hippocampus",
//!     ReferenceCurve::new(
//!         vec![28.0, 30.0, 32.0],
//!         vec![80.0, 96.0, 112.0],
//!         vec![90.0, 108.0, 126.0],
//!         vec![100.0, 120.0, 140.0],
//!         vec![110.0, 132.0, 154.0],
//!         vec![120.0, 144.0, 168.0],
//!     )
//!     .unwrap(),
//! );
//!
//! let mut measurements = HashMap::new();
//! measurements.insert("hippocampus".to_string(), 130.0);
//!
//! let estimates = estimate_regions(31.0, &measurements, &curves).unwrap();
//! assert_eq!(estimates["hippocampus"].input_percentile, Some(50.0));
//! ```
//!
//! Both stages are deterministic and share no mutable state; per-region work
//! is embarrassingly parallel. Enable the `parallel` feature to fan it out
//! with rayon.

pub use growth_core::{erf, standard_normal_cdf, Error, Result};
pub use growth_curve::{
    interpolate, CurveProvider, CurveSet, InterpolatedPoint, PercentileBand, ReferenceCurve,
};
pub use growth_percentile::{estimate_percentile, estimate_regions, GaussianFit, RegionEstimate};
