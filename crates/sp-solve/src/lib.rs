//! Scalar root finding for steamcalc.
//!
//! One bracketed bisection kernel serves every inversion in the property
//! library. No secondary bracketing methods: given the same coefficients,
//! every platform walks the same iteration sequence.

pub mod bisect;

pub use bisect::{bisect, BisectConfig, BisectError};
