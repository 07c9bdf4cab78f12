//! Region 3: critical/supercritical water, 623.15–1073.15 K below the B23
//! boundary, up to 100 MPa.
//!
//! The region is formulated as a Helmholtz potential in (T, ρ)
//! ([`helmholtz`]), which has no closed form in (T, p). The production
//! (T, p) path instead composes the official backward series
//! ([`backward`]) with one-dimensional bisection: solve T(p,h) = T for h,
//! read v(p,h), solve T(p,s) = T for s, then recover the heat capacities
//! and speed of sound from centred numerical derivatives of the same
//! series.

pub mod backward;
pub mod helmholtz;

use crate::b23;
use crate::error::{If97Error, If97Result};
use crate::properties::{validation, Properties};
use crate::region::Region;
use backward::SubRegion3;
use sp_core::units::constants::S_CRIT_KJ_KG_K;
use sp_solve::{bisect, BisectConfig};

/// Enthalpy bracket low end for sub-region 3a [kJ/kg].
const H_MIN_3A: f64 = 1.0;
/// Enthalpy bracket high end for sub-region 3b [kJ/kg].
const H_MAX_3B: f64 = 4500.0;
/// Entropy bracket low end for 3a [kJ/(kg·K)]. The Region 3 minimum
/// entropy is 3.398 at (623.15 K, 100 MPa); starting lower walks the scan
/// into a non-physical oscillation of the series near s ≈ 1.5.
const S_MIN_3A: f64 = 3.0;
/// Entropy bracket high end for 3b [kJ/(kg·K)].
const S_MAX_3B: f64 = 10.0;

/// Step sizes for the centred numerical derivatives.
const DT_K: f64 = 1.0e-3;
const DP_PA: f64 = 1.0e3;
const DS_KJ_KG_K: f64 = 1.0e-5;

fn bisect_cfg() -> BisectConfig {
    BisectConfig::default()
}

/// Solve T_sub(p, h) = t_k for h within the sub-region's bracket.
fn solve_h(sub: SubRegion3, t_k: f64, p_pa: f64) -> If97Result<f64> {
    let hb = backward::h_boundary_3ab(p_pa);
    let (lo, hi) = match sub {
        SubRegion3::A => (H_MIN_3A, hb),
        SubRegion3::B => (hb, H_MAX_3B),
    };
    bisect(
        |h| Ok::<_, If97Error>(backward::temperature_ph(sub, p_pa, h) - t_k),
        lo,
        hi,
        &bisect_cfg(),
    )
    .map_err(If97Error::from_bisect(Region::R3, "T(p,h) inversion"))
}

/// Solve T_sub(p, s) = t_k for s; bracket split at the critical entropy.
fn solve_s(sub: SubRegion3, t_k: f64, p_pa: f64) -> If97Result<f64> {
    let (lo, hi) = match sub {
        SubRegion3::A => (S_MIN_3A, S_CRIT_KJ_KG_K),
        SubRegion3::B => (S_CRIT_KJ_KG_K, S_MAX_3B),
    };
    bisect(
        |s| Ok::<_, If97Error>(backward::temperature_ps(sub, p_pa, s) - t_k),
        lo,
        hi,
        &bisect_cfg(),
    )
    .map_err(If97Error::from_bisect(Region::R3, "T(p,s) inversion"))
}

/// Pick the sub-region for a (T, p) state: 3a covers temperatures up to the
/// value of its series at h_3ab(p), 3b everything above. Comparing against
/// the series top keeps the endpoint signs of the enthalpy bracket opposed,
/// so the bisection never relies on the scan (which can land on a spurious
/// low-enthalpy oscillation of the 3a series).
fn select_sub(t_k: f64, p_pa: f64) -> SubRegion3 {
    let hb = backward::h_boundary_3ab(p_pa);
    if t_k <= backward::temperature_ph(SubRegion3::A, p_pa, hb) {
        SubRegion3::A
    } else {
        SubRegion3::B
    }
}

/// Compute Region 3 properties for T in Kelvin and p in Pascal via the
/// backward-series composition.
pub fn evaluate(t_k: f64, p_pa: f64) -> If97Result<Properties> {
    if p_pa <= 0.0 {
        return Err(If97Error::Domain {
            what: "pressure",
            value: p_pa,
        });
    }
    if !(623.15..=1073.15).contains(&t_k) {
        return Err(If97Error::Applicability {
            region: Region::R3,
            what: format!("T={t_k:.2} K out of [623.15, 1073.15] K"),
        });
    }
    if p_pa > 100.0e6 {
        return Err(If97Error::Applicability {
            region: Region::R3,
            what: format!("p={p_pa:.0} Pa exceeds 100 MPa"),
        });
    }
    if p_pa < 16.529e6 {
        return Err(If97Error::Applicability {
            region: Region::R3,
            what: format!("p={p_pa:.0} Pa is below the 16.529 MPa corner"),
        });
    }
    if let Ok(t_b23) = b23::temperature_from_pressure(p_pa / 1.0e6) {
        if t_k > t_b23 {
            return Err(If97Error::Applicability {
                region: Region::R3,
                what: format!("T={t_k:.2} K is above the B23 boundary ({t_b23:.2} K)"),
            });
        }
    }

    let sub = select_sub(t_k, p_pa);
    let h = solve_h(sub, t_k, p_pa)?;
    let v = backward::volume_ph(sub, p_pa, h);
    if !(v.is_finite() && v > 0.0) {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "specific volume",
        });
    }
    let rho = 1.0 / v;
    let s = solve_s(sub, t_k, p_pa)?;
    let u = h - p_pa * v / 1000.0;

    // cp = (∂h/∂T)_p, re-inverting the temperature series at T ± dT.
    let h_plus = solve_h(sub, t_k + DT_K, p_pa)?;
    let h_minus = solve_h(sub, t_k - DT_K, p_pa)?;
    let cp = (h_plus - h_minus) / (2.0 * DT_K);

    // Thermal expansion α = (1/v)(∂v/∂T)_p from v(p, h(T ± dT)).
    let dv_dt = (backward::volume_ph(sub, p_pa, h_plus) - backward::volume_ph(sub, p_pa, h_minus))
        / (2.0 * DT_K);
    let alpha = dv_dt / v;

    // Isothermal compressibility κ_T = −(1/v)(∂v/∂p)_T, re-inverting h at
    // p ± dp with T held fixed.
    let v_at = |p: f64| -> If97Result<f64> {
        let hh = solve_h(sub, t_k, p)?;
        Ok(backward::volume_ph(sub, p, hh))
    };
    let dv_dp_t = (v_at(p_pa + DP_PA)? - v_at(p_pa - DP_PA)?) / (2.0 * DP_PA);
    let kappa_t = -dv_dp_t / v;
    // The 1/1000 converts the J of p·v against the kJ of cp.
    let cv = cp - t_k * alpha * alpha / (rho * kappa_t) / 1000.0;

    // Isentropic compressibility from v(p ± dp, s); w = 1/sqrt(ρ κ_s).
    let dv_dp_s = (backward::volume_ps(sub, p_pa + DP_PA, s)
        - backward::volume_ps(sub, p_pa - DP_PA, s))
        / (2.0 * DP_PA);
    let kappa_s = -dv_dp_s / v;
    if kappa_s <= 0.0 {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "isentropic compressibility",
        });
    }
    let w = (1.0 / (rho * kappa_s)).sqrt();

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
        Region::R3,
    )
}

/// Compute pressure [Pa], temperature [K] and full properties from
/// (h [kJ/kg], s [kJ/(kg·K)]) through the Region 3 backward equations.
pub fn properties_from_hs(h: f64, s: f64) -> If97Result<(f64, f64, Properties)> {
    let p_pa = backward::pressure_hs(h, s)?;
    let sub = if s <= S_CRIT_KJ_KG_K {
        SubRegion3::A
    } else {
        SubRegion3::B
    };

    let t_k = backward::temperature_ps(sub, p_pa, s);
    if !(623.15..=1073.15).contains(&t_k) {
        return Err(If97Error::Applicability {
            region: Region::R3,
            what: format!("recovered T={t_k:.2} K outside [623.15, 1073.15] K; the state is not in Region 3"),
        });
    }
    let v = backward::volume_ps(sub, p_pa, s);
    if !(v.is_finite() && v > 0.0) {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "specific volume",
        });
    }
    let rho = 1.0 / v;
    let u = h - p_pa * v / 1000.0;

    // cp = T (∂s/∂T)_p = T / (∂T/∂s)_p, centred in s.
    let t_s_plus = backward::temperature_ps(sub, p_pa, s + DS_KJ_KG_K);
    let t_s_minus = backward::temperature_ps(sub, p_pa, s - DS_KJ_KG_K);
    let dt_ds = (t_s_plus - t_s_minus) / (2.0 * DS_KJ_KG_K);
    if dt_ds == 0.0 || !dt_ds.is_finite() {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "(∂T/∂s)_p",
        });
    }
    let cp = t_k / dt_ds;

    // Isentropic compressibility and speed of sound.
    let v_p_plus = backward::volume_ps(sub, p_pa + DP_PA, s);
    let v_p_minus = backward::volume_ps(sub, p_pa - DP_PA, s);
    let dv_dp_s = (v_p_plus - v_p_minus) / (2.0 * DP_PA);
    let kappa_s = -dv_dp_s / v;
    if kappa_s <= 0.0 {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "isentropic compressibility",
        });
    }
    let w = (1.0 / (rho * kappa_s)).sqrt();

    // cv from the same tables via the triple-product rule:
    // (∂v/∂T)_p = (∂v/∂s)_p / (∂T/∂s)_p and
    // (∂v/∂p)_T = (∂v/∂p)_s − (∂v/∂s)_p (∂T/∂p)_s / (∂T/∂s)_p.
    let dv_ds = (backward::volume_ps(sub, p_pa, s + DS_KJ_KG_K)
        - backward::volume_ps(sub, p_pa, s - DS_KJ_KG_K))
        / (2.0 * DS_KJ_KG_K);
    let dt_dp_s = (backward::temperature_ps(sub, p_pa + DP_PA, s)
        - backward::temperature_ps(sub, p_pa - DP_PA, s))
        / (2.0 * DP_PA);
    let alpha = dv_ds / dt_ds / v;
    let dv_dp_t = dv_dp_s - dv_ds * dt_dp_s / dt_ds;
    let kappa_t = -dv_dp_t / v;
    if kappa_t <= 0.0 {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "isothermal compressibility",
        });
    }
    let cv = cp - t_k * alpha * alpha / (rho * kappa_t) / 1000.0;

    let props = validation::check(
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
        Region::R3,
    )?;
    Ok((p_pa, t_k, props))
}
