//! sp-core: stable foundation for steamcalc.
//!
//! Contains:
//! - units (uom SI types + constructors + water constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SpError, SpResult};
pub use numeric::*;
pub use units::*;
