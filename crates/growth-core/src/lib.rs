//! Core primitives for growth-curve percentile estimation
//!
//! This crate carries the pieces every other growth-stats crate needs:
//!
//! - a unified [`Error`]/[`Result`] pair built on `thiserror`
//! - standard-normal primitives ([`erf`], [`standard_normal_cdf`]) used to
//!   invert a fitted Gaussian into a percentile rank

pub mod error;
pub mod normal;

pub use error::{Error, Result};
pub use normal::{erf, standard_normal_cdf};
