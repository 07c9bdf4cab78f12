//! Transport properties of water and steam.
//!
//! Simple engineering correlations, split at the liquid/steam density
//! boundary: an Arrhenius-type viscosity law and a linear-in-temperature
//! conductivity for the liquid, Sutherland-type forms for steam, each with
//! a mild density correction. These sit beside the equilibrium property
//! core and take its (T, ρ) output as input.

pub mod correlations;
pub mod error;

pub use correlations::{dynamic_viscosity, kinematic_viscosity, thermal_conductivity};
pub use error::{TransportError, TransportResult};
