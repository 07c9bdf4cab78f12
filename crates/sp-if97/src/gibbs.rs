//! Shared property assembly for the Gibbs-potential regions.
//!
//! Regions 1, 2 and 5 differ only in how the dimensionless potential and
//! its partial derivatives are accumulated; the algebra mapping those
//! derivatives to physical properties is common. Written in terms of the
//! combined potential it is identical to the per-region forms of the IF-97
//! release document.

use crate::error::{If97Error, If97Result};
use crate::properties::{validation, Properties};
use crate::region::Region;
use sp_core::units::constants::R_KJ_KG_K;

/// The dimensionless Gibbs potential and its partial derivatives at one
/// reduced state (π, τ).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GibbsDerivs {
    pub g: f64,
    pub g_pi: f64,
    pub g_pipi: f64,
    pub g_tau: f64,
    pub g_tautau: f64,
    pub g_pitau: f64,
}

/// Assemble the full property record from the potential derivatives.
///
/// R is in kJ/(kg·K), so the specific-volume relation wants p in kPa; the
/// factor 1000 in the speed of sound converts kJ/kg to m²/s².
pub(crate) fn assemble(
    region: Region,
    t_k: f64,
    p_pa: f64,
    pi: f64,
    tau: f64,
    d: &GibbsDerivs,
) -> If97Result<Properties> {
    let r = R_KJ_KG_K;
    let p_kpa = p_pa / 1000.0;

    let v = pi * d.g_pi * r * t_k / p_kpa;
    let rho = 1.0 / v;
    let u = r * t_k * (tau * d.g_tau - pi * d.g_pi);
    let s = r * (tau * d.g_tau - d.g);
    let h = r * t_k * tau * d.g_tau;
    let cp = -r * tau * tau * d.g_tautau;
    let dev = d.g_pi - tau * d.g_pitau;
    let cv = r * (-tau * tau * d.g_tautau + dev * dev / d.g_pipi);

    // Signed denominator: a non-positive value means the state is outside
    // the region's thermodynamically stable envelope.
    let denom = dev * dev / (tau * tau * d.g_tautau) - d.g_pipi;
    if denom <= 0.0 {
        return Err(If97Error::Applicability {
            region,
            what: format!("speed-of-sound denominator is not positive ({denom:.6e})"),
        });
    }
    let w = (1000.0 * r * t_k * d.g_pi * d.g_pi / denom).sqrt();

    validation::check(
        Properties {
            specific_volume: v,
            density: rho,
            internal_energy: u,
            entropy: s,
            enthalpy: h,
            cv,
            cp,
            speed_of_sound: w,
        },
        region,
    )
}
