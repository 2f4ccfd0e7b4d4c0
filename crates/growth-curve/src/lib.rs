//! Reference growth-curve data model and age-based interpolation
//!
//! This crate owns the first stage of the percentile engine: it loads and
//! validates population reference curves (one per anatomical region, five
//! percentile bands each) and interpolates them at a subject's age.
//!
//! # Overview
//!
//! A [`ReferenceCurve`] pairs an ascending age axis with one value series per
//! [`PercentileBand`]. [`ReferenceCurve::sample_at`] blends each band linearly
//! between the two bracketing age samples, clamping to the boundary samples
//! outside the sampled range. The resulting [`InterpolatedPoint`] is all the
//! downstream estimator needs besides the raw measurement.
//!
//! # Examples
//!
//! ```
//! use growth_curve::ReferenceCurve;
//!
//! let curve = ReferenceCurve::new(
//!     vec![28.0, 30.0, 32.0],
//!     vec![80.0, 96.0, 112.0],
//!     vec![90.0, 108.0, 126.0],
//!     vec![100.0, 120.0, 140.0],
//!     vec![110.0, 132.0, 154.0],
//!     vec![120.0, 144.0, 168.0],
//! )
//! .unwrap();
//!
//! let point = curve.sample_at(31.0).unwrap();
//! assert_eq!(point.p50, 130.0);
//! ```

pub mod band;
pub mod curve;
pub mod interpolate;

// Re-exports
pub use band::PercentileBand;
pub use curve::{CurveProvider, CurveSet, ReferenceCurve};
pub use interpolate::{interpolate, InterpolatedPoint};
