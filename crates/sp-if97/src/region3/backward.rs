//! Region 3 backward series: T(p,h), v(p,h), T(p,s), v(p,s), p(h,s) for
//! sub-regions 3a/3b, and the h_3ab(p) split polynomial.

use crate::error::{If97Error, If97Result};
use crate::region::Region;
use crate::tables::{eval_series, tables};

/// Region 3 splits along the critical isentrope into 3a (s ≤ s_c) and
/// 3b (s > s_c).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubRegion3 {
    A,
    B,
}

// Reference normalisers and shifts, one block per series.
const P_STAR_MPA: f64 = 100.0;

const T_STAR_3A_PH: f64 = 760.0;
const H_STAR_T3A_PH: f64 = 2300.0;
const PI_SHIFT_T3A_PH: f64 = 0.240;
const ETA_SHIFT_T3A_PH: f64 = -0.615;

const V_STAR_3A_PH: f64 = 0.0028;
const H_STAR_V3A_PH: f64 = 2100.0;
const PI_SHIFT_V3A_PH: f64 = 0.128;
const ETA_SHIFT_V3A_PH: f64 = -0.727;

const T_STAR_3B_PH: f64 = 860.0;
const H_STAR_3B_PH: f64 = 2800.0;
const PI_SHIFT_T3B_PH: f64 = 0.298;
const ETA_SHIFT_3B_PH: f64 = -0.720;

const V_STAR_3B_PH: f64 = 0.0088;
const PI_SHIFT_V3B_PH: f64 = 0.0661;

const T_STAR_3A_PS: f64 = 760.0;
const S_STAR_3A_PS: f64 = 4.4;
const PI_SHIFT_T3A_PS: f64 = 0.240;
const SIG_SHIFT_T3A_PS: f64 = -0.703;

const V_STAR_3A_PS: f64 = 0.0028;
const PI_SHIFT_V3A_PS: f64 = 0.187;
const SIG_SHIFT_V3A_PS: f64 = -0.755;

const T_STAR_3B_PS: f64 = 860.0;
const S_STAR_3B_PS: f64 = 5.3;
const PI_SHIFT_T3B_PS: f64 = 0.760;
const SIG_SHIFT_T3B_PS: f64 = -0.818;

const V_STAR_3B_PS: f64 = 0.0088;
const PI_SHIFT_V3B_PS: f64 = 0.298;
const SIG_SHIFT_V3B_PS: f64 = -0.816;

// p(h,s) normalisers per the supplementary release.
const P_STAR_3A_HS: f64 = 99.0;
const H_STAR_3A_HS: f64 = 2300.0;
const S_STAR_3A_HS: f64 = 4.4;
const P_STAR_3B_HS: f64 = 16.6;
const H_STAR_3B_HS: f64 = 2800.0;
const S_STAR_3B_HS: f64 = 5.3;

/// Enthalpy [kJ/kg] separating 3a from 3b along the isobar p [Pa].
pub fn h_boundary_3ab(p_pa: f64) -> f64 {
    let n = &tables().h3ab;
    let p = p_pa / 1.0e6;
    n[1] + n[2] * p + n[3] * p * p + n[4] * p * p * p
}

/// Backward temperature T(p,h) [K]; p [Pa], h [kJ/kg].
pub fn temperature_ph(sub: SubRegion3, p_pa: f64, h: f64) -> f64 {
    let t = tables();
    let p_mpa = p_pa / 1.0e6;
    match sub {
        SubRegion3::A => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_T3A_PH;
            let eta = h / H_STAR_T3A_PH + ETA_SHIFT_T3A_PH;
            T_STAR_3A_PH * eval_series(&t.t3a_ph, pi, eta)
        }
        SubRegion3::B => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_T3B_PH;
            let eta = h / H_STAR_3B_PH + ETA_SHIFT_3B_PH;
            T_STAR_3B_PH * eval_series(&t.t3b_ph, pi, eta)
        }
    }
}

/// Backward specific volume v(p,h) [m³/kg]; p [Pa], h [kJ/kg].
pub fn volume_ph(sub: SubRegion3, p_pa: f64, h: f64) -> f64 {
    let t = tables();
    let p_mpa = p_pa / 1.0e6;
    match sub {
        SubRegion3::A => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_V3A_PH;
            let eta = h / H_STAR_V3A_PH + ETA_SHIFT_V3A_PH;
            V_STAR_3A_PH * eval_series(&t.v3a_ph, pi, eta)
        }
        SubRegion3::B => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_V3B_PH;
            let eta = h / H_STAR_3B_PH + ETA_SHIFT_3B_PH;
            V_STAR_3B_PH * eval_series(&t.v3b_ph, pi, eta)
        }
    }
}

/// Backward temperature T(p,s) [K]; p [Pa], s [kJ/(kg·K)].
pub fn temperature_ps(sub: SubRegion3, p_pa: f64, s: f64) -> f64 {
    let t = tables();
    let p_mpa = p_pa / 1.0e6;
    match sub {
        SubRegion3::A => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_T3A_PS;
            let sig = s / S_STAR_3A_PS + SIG_SHIFT_T3A_PS;
            T_STAR_3A_PS * eval_series(&t.t3a_ps, pi, sig)
        }
        SubRegion3::B => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_T3B_PS;
            let sig = s / S_STAR_3B_PS + SIG_SHIFT_T3B_PS;
            T_STAR_3B_PS * eval_series(&t.t3b_ps, pi, sig)
        }
    }
}

/// Backward specific volume v(p,s) [m³/kg]; p [Pa], s [kJ/(kg·K)].
pub fn volume_ps(sub: SubRegion3, p_pa: f64, s: f64) -> f64 {
    let t = tables();
    let p_mpa = p_pa / 1.0e6;
    match sub {
        SubRegion3::A => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_V3A_PS;
            let sig = s / S_STAR_3A_PS + SIG_SHIFT_V3A_PS;
            V_STAR_3A_PS * eval_series(&t.v3a_ps, pi, sig)
        }
        SubRegion3::B => {
            let pi = p_mpa / P_STAR_MPA + PI_SHIFT_V3B_PS;
            let sig = s / S_STAR_3B_PS + SIG_SHIFT_V3B_PS;
            V_STAR_3B_PS * eval_series(&t.v3b_ps, pi, sig)
        }
    }
}

/// Closed-form pressure p(h,s) [Pa]; sub-region chosen by s against the
/// critical entropy. h [kJ/kg], s [kJ/(kg·K)].
pub fn pressure_hs(h: f64, s: f64) -> If97Result<f64> {
    if !(h > 0.0 && h < 4000.0) {
        return Err(If97Error::Applicability {
            region: Region::R3,
            what: format!("h={h:.3} kJ/kg out of (0, 4000)"),
        });
    }
    if !(s > 0.0 && s < 10.0) {
        return Err(If97Error::Applicability {
            region: Region::R3,
            what: format!("s={s:.3} kJ/(kg·K) out of (0, 10)"),
        });
    }
    let t = tables();
    let p_mpa = if s <= sp_core::units::constants::S_CRIT_KJ_KG_K {
        let eta = h / H_STAR_3A_HS - 1.01;
        let sig = s / S_STAR_3A_HS - 0.750;
        P_STAR_3A_HS * eval_series(&t.p3a_hs, eta, sig)
    } else {
        let eta = h / H_STAR_3B_HS - 0.681;
        let sig = s / S_STAR_3B_HS - 0.792;
        let denom = eval_series(&t.p3b_hs, eta, sig);
        if denom == 0.0 || !denom.is_finite() {
            return Err(If97Error::NonFinite {
                region: Region::R3,
                what: "p(h,s) series denominator",
            });
        }
        P_STAR_3B_HS / denom
    };
    let p = p_mpa * 1.0e6;
    if !p.is_finite() || p <= 0.0 {
        return Err(If97Error::NonFinite {
            region: Region::R3,
            what: "backward pressure",
        });
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::numeric::rel_diff;

    // Verification tables of the IAPWS supplementary releases for the
    // backward equations T(p,h), v(p,h), T(p,s), v(p,s) and p(h,s).
    #[test]
    fn boundary_polynomial() {
        assert!(rel_diff(h_boundary_3ab(25.0e6), 2095.936454) < 1e-9);
    }

    #[test]
    fn temperature_ph_reference_points() {
        let cases = [
            (SubRegion3::A, 20.0e6, 1700.0, 629.3083892),
            (SubRegion3::A, 50.0e6, 2000.0, 690.5718338),
            (SubRegion3::A, 100.0e6, 2100.0, 733.6163014),
            (SubRegion3::B, 20.0e6, 2500.0, 641.8418053),
            (SubRegion3::B, 50.0e6, 2400.0, 735.1848618),
            (SubRegion3::B, 100.0e6, 2700.0, 842.0460876),
        ];
        for (sub, p, h, expected) in cases {
            assert!(rel_diff(temperature_ph(sub, p, h), expected) < 1e-9);
        }
    }

    #[test]
    fn volume_ph_reference_points() {
        let cases = [
            (SubRegion3::A, 20.0e6, 1700.0, 1.749903962e-3),
            (SubRegion3::A, 50.0e6, 2000.0, 1.908139035e-3),
            (SubRegion3::A, 100.0e6, 2100.0, 1.676229776e-3),
            (SubRegion3::B, 20.0e6, 2500.0, 6.670547043e-3),
            (SubRegion3::B, 50.0e6, 2400.0, 2.801244590e-3),
            (SubRegion3::B, 100.0e6, 2700.0, 2.404234998e-3),
        ];
        for (sub, p, h, expected) in cases {
            assert!(rel_diff(volume_ph(sub, p, h), expected) < 1e-9);
        }
    }

    #[test]
    fn temperature_ps_reference_points() {
        let cases = [
            (SubRegion3::A, 20.0e6, 3.8, 628.2959869),
            (SubRegion3::A, 50.0e6, 3.6, 629.7158726),
            (SubRegion3::A, 100.0e6, 4.0, 705.6880237),
            (SubRegion3::B, 20.0e6, 5.0, 640.1176443),
            (SubRegion3::B, 50.0e6, 4.5, 716.3687517),
            (SubRegion3::B, 100.0e6, 5.0, 847.4332825),
        ];
        for (sub, p, s, expected) in cases {
            assert!(rel_diff(temperature_ps(sub, p, s), expected) < 1e-9);
        }
    }

    #[test]
    fn volume_ps_reference_points() {
        let cases = [
            (SubRegion3::A, 20.0e6, 3.8, 1.733791463e-3),
            (SubRegion3::A, 50.0e6, 3.6, 1.469680170e-3),
            (SubRegion3::A, 100.0e6, 4.0, 1.555893131e-3),
            (SubRegion3::B, 20.0e6, 5.0, 6.262101987e-3),
            (SubRegion3::B, 50.0e6, 4.5, 2.332634294e-3),
            (SubRegion3::B, 100.0e6, 5.0, 2.449610757e-3),
        ];
        for (sub, p, s, expected) in cases {
            assert!(rel_diff(volume_ps(sub, p, s), expected) < 1e-9);
        }
    }

    #[test]
    fn pressure_hs_reference_points() {
        let cases = [
            (1700.0, 3.8, 25.55703246e6),
            (2000.0, 4.2, 45.40873468e6),
            (2100.0, 4.3, 60.78123340e6),
            (2600.0, 5.1, 34.34999263e6),
            (2400.0, 4.7, 63.63924887e6),
            (2700.0, 5.0, 88.39043281e6),
        ];
        for (h, s, expected) in cases {
            assert!(
                rel_diff(pressure_hs(h, s).unwrap(), expected) < 1e-9,
                "p(h={h}, s={s})"
            );
        }
    }

    #[test]
    fn pressure_hs_rejects_out_of_window_inputs() {
        assert!(pressure_hs(-10.0, 4.0).is_err());
        assert!(pressure_hs(4500.0, 4.0).is_err());
        assert!(pressure_hs(2000.0, 12.0).is_err());
    }

    #[test]
    fn series_join_near_h3ab() {
        // The two temperature series meet at h_3ab to within a few mK.
        let p = 25.0e6;
        let hb = h_boundary_3ab(p);
        let ta = temperature_ph(SubRegion3::A, p, hb);
        let tb = temperature_ph(SubRegion3::B, p, hb);
        assert!((ta - tb).abs() < 0.01);
    }
}
