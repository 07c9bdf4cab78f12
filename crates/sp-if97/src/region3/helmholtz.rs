//! Region 3 forward equation of state: a Helmholtz potential in (T, ρ).
//!
//! Volume is a smooth function of (T, ρ) but not of (T, p) near the
//! critical point, hence the change of variables. For (T, p) input the
//! density is recovered with the bisection kernel; the backward-series
//! composition in the parent module remains the production (T, p) path and
//! is verified against this potential.

use crate::error::{If97Error, If97Result};
use crate::properties::{validation, Properties};
use crate::region::Region;
use crate::tables::tables;
use sp_core::units::constants::{RHO_CRIT_KG_M3, R_KJ_KG_K, T_CRIT_K};
use sp_solve::{bisect, BisectConfig};

#[derive(Debug, Clone, Copy)]
struct PhiDerivs {
    phi: f64,
    phi_d: f64,
    phi_dd: f64,
    phi_t: f64,
    phi_tt: f64,
    phi_dt: f64,
}

fn phi_derivs(delta: f64, tau: f64) -> PhiDerivs {
    let t = tables();
    let terms = &t.region3;
    // Term 1 is n₁·ln δ; the rest are ordinary δ^I τ^J terms.
    let n1 = terms[0].n;
    let mut d = PhiDerivs {
        phi: n1 * delta.ln(),
        phi_d: n1 / delta,
        phi_dd: -n1 / (delta * delta),
        phi_t: 0.0,
        phi_tt: 0.0,
        phi_dt: 0.0,
    };
    for term in &terms[1..] {
        let (i, j, n) = (term.i, term.j, term.n);
        let di = delta.powi(i);
        let tj = tau.powi(j);
        d.phi += n * di * tj;
        d.phi_d += n * f64::from(i) * delta.powi(i - 1) * tj;
        d.phi_dd += n * f64::from(i) * f64::from(i - 1) * delta.powi(i - 2) * tj;
        d.phi_t += n * f64::from(j) * di * tau.powi(j - 1);
        d.phi_tt += n * f64::from(j) * f64::from(j - 1) * di * tau.powi(j - 2);
        d.phi_dt += n * f64::from(i) * f64::from(j) * delta.powi(i - 1) * tau.powi(j - 1);
    }
    d
}

fn reduced(rho: f64, t_k: f64) -> If97Result<(f64, f64)> {
    if !rho.is_finite() || rho <= 0.0 {
        return Err(If97Error::Domain {
            what: "density",
            value: rho,
        });
    }
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(If97Error::Domain {
            what: "temperature",
            value: t_k,
        });
    }
    Ok((rho / RHO_CRIT_KG_M3, T_CRIT_K / t_k))
}

/// Pressure [Pa] from the potential at (ρ [kg/m³], T [K]).
pub fn pressure_rho_t(rho: f64, t_k: f64) -> If97Result<f64> {
    let (delta, tau) = reduced(rho, t_k)?;
    let d = phi_derivs(delta, tau);
    // ρRT δ φ_δ is in kPa with R in kJ/(kg·K).
    let p = rho * R_KJ_KG_K * t_k * delta * d.phi_d * 1000.0;
    if !p.is_finite() {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "pressure",
        });
    }
    Ok(p)
}

/// Full property set from the potential at (ρ [kg/m³], T [K]).
pub fn properties_rho_t(rho: f64, t_k: f64) -> If97Result<Properties> {
    let (delta, tau) = reduced(rho, t_k)?;
    let r = R_KJ_KG_K;
    let d = phi_derivs(delta, tau);

    let u = r * t_k * tau * d.phi_t;
    let s = r * (tau * d.phi_t - d.phi);
    let h = r * t_k * (tau * d.phi_t + delta * d.phi_d);
    let cv = -r * tau * tau * d.phi_tt;
    let dev = delta * d.phi_d - delta * tau * d.phi_dt;
    let stiff = 2.0 * delta * d.phi_d + delta * delta * d.phi_dd;
    if stiff <= 0.0 {
        return Err(If97Error::Applicability {
            region: Region::R3,
            what: format!("(∂p/∂ρ)_T is not positive at ρ={rho:.3}, T={t_k:.3}"),
        });
    }
    let cp = cv + r * dev * dev / stiff;
    let w2 = 1000.0 * r * t_k * (stiff - dev * dev / (tau * tau * d.phi_tt));
    if w2 <= 0.0 {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "speed of sound",
        });
    }

    validation::check(
        Properties {
            specific_volume: 1.0 / rho,
            density: rho,
            internal_energy: u,
            entropy: s,
            enthalpy: h,
            cv,
            cp,
            speed_of_sound: w2.sqrt(),
        },
        Region::R3,
    )
}

/// Invert the potential for density at (T [K], p [Pa]).
///
/// p(ρ) is strictly increasing for supercritical temperatures; below
/// T_c the isotherm folds and the first scanned crossing is returned, so
/// callers on the two-phase band must pick their own bracket.
pub fn density_tp(t_k: f64, p_pa: f64) -> If97Result<f64> {
    let cfg = BisectConfig {
        tol: 1e-8,
        max_iterations: 200,
        ..Default::default()
    };
    bisect(
        |rho| pressure_rho_t(rho, t_k).map(|p| p - p_pa),
        1.0,
        765.0,
        &cfg,
    )
    .map_err(If97Error::from_bisect(Region::R3, "p(ρ,T) = p"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::numeric::rel_diff;

    // IAPWS-IF97 Table 33 verification states.
    #[test]
    fn reference_state_650k_500() {
        let p = pressure_rho_t(500.0, 650.0).unwrap();
        assert!(rel_diff(p, 25.5837018e6) < 1e-8);
        let props = properties_rho_t(500.0, 650.0).unwrap();
        assert!(rel_diff(props.enthalpy, 1863.43019) < 1e-8);
        assert!(rel_diff(props.entropy, 4.05427273) < 1e-8);
        assert!(rel_diff(props.cp, 13.8935717) < 1e-8);
        assert!(rel_diff(props.speed_of_sound, 502.005554) < 1e-8);
    }

    #[test]
    fn reference_state_650k_200() {
        let p = pressure_rho_t(200.0, 650.0).unwrap();
        assert!(rel_diff(p, 22.2930643e6) < 1e-8);
        let props = properties_rho_t(200.0, 650.0).unwrap();
        assert!(rel_diff(props.enthalpy, 2375.12401) < 1e-8);
        assert!(rel_diff(props.entropy, 4.85438792) < 1e-8);
        assert!(rel_diff(props.cp, 44.6579342) < 1e-8);
        assert!(rel_diff(props.speed_of_sound, 383.444594) < 1e-8);
    }

    #[test]
    fn reference_state_750k_500() {
        let p = pressure_rho_t(500.0, 750.0).unwrap();
        assert!(rel_diff(p, 78.3095639e6) < 1e-8);
        let props = properties_rho_t(500.0, 750.0).unwrap();
        assert!(rel_diff(props.enthalpy, 2258.68845) < 1e-8);
        assert!(rel_diff(props.entropy, 4.46971906) < 1e-8);
        assert!(rel_diff(props.cp, 6.34165359) < 1e-8);
        assert!(rel_diff(props.speed_of_sound, 760.696041) < 1e-8);
    }

    #[test]
    fn density_inversion_recovers_reference_density() {
        let rho = density_tp(650.0, 25.5837018e6).unwrap();
        assert!(rel_diff(rho, 500.0) < 1e-6);
        let rho = density_tp(750.0, 78.3095639e6).unwrap();
        assert!(rel_diff(rho, 500.0) < 1e-6);
    }

    #[test]
    fn rejects_nonpositive_density() {
        assert!(pressure_rho_t(0.0, 650.0).is_err());
        assert!(pressure_rho_t(-1.0, 650.0).is_err());
    }
}
