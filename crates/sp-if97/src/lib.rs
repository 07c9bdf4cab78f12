//! sp-if97: water and steam properties per the IAPWS Industrial
//! Formulation 1997.
//!
//! Given a state as (temperature, pressure) or (enthalpy, entropy), the
//! crate returns specific volume, density, internal energy, entropy,
//! enthalpy, both heat capacities and the speed of sound.
//!
//! # Architecture
//!
//! A classifier maps the input state to one of five sub-regions; each
//! region evaluates a dimensionless Gibbs or Helmholtz potential from
//! embedded coefficient tables. Region 3 has no closed form in (T, p) and
//! is inverted through the official backward series with one-dimensional
//! bisection (`sp-solve`). All inputs and outputs are SI: K/°C, Pa, kJ/kg,
//! kJ/(kg·K), m/s.
//!
//! # Example
//!
//! ```
//! use sp_if97::{properties_from_tp, Region};
//!
//! let (props, region) = properties_from_tp(20.0, 101_325.0).unwrap();
//! assert_eq!(region, Region::R1);
//! assert!((props.density - 998.2).abs() < 0.1);
//! ```
//!
//! The crate is stateless after the coefficient tables load (once, on
//! first access); any number of threads may call property functions in
//! parallel.

pub mod b23;
pub mod calculator;
pub mod classify;
pub mod error;
mod gibbs;
pub mod properties;
pub mod region;
pub mod region1;
pub mod region2;
pub mod region3;
pub mod region4;
pub mod region5;
mod tables;

// Re-exports for ergonomics
pub use calculator::{
    properties_from_hs, properties_from_tp, properties_from_tp_in, saturation_pressure,
    saturation_temperature, HsState,
};
pub use classify::classify_tp;
pub use error::{If97Error, If97Result};
pub use properties::Properties;
pub use region::Region;
