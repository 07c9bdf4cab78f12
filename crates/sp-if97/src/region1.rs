//! Region 1: compressed liquid, 273.15–623.15 K up to 100 MPa.

use crate::error::{If97Error, If97Result};
use crate::gibbs::{assemble, GibbsDerivs};
use crate::properties::Properties;
use crate::region::Region;
use crate::region4;
use crate::tables::tables;
use sp_core::units::constants::T_CRIT_K;

const P_STAR_MPA: f64 = 16.53;
const T_STAR_K: f64 = 1386.0;

/// Compute Region 1 properties for T in Kelvin and p in Pascal.
pub fn evaluate(t_k: f64, p_pa: f64) -> If97Result<Properties> {
    if p_pa <= 0.0 {
        return Err(If97Error::Domain {
            what: "pressure",
            value: p_pa,
        });
    }
    if t_k < 273.15 {
        return Err(If97Error::Applicability {
            region: Region::R1,
            what: format!("T={t_k:.2} K is below 273.15 K"),
        });
    }
    if t_k > 623.15 {
        return Err(If97Error::Applicability {
            region: Region::R1,
            what: format!("T={t_k:.2} K exceeds 623.15 K"),
        });
    }
    if p_pa > 100.0e6 {
        return Err(If97Error::Applicability {
            region: Region::R1,
            what: format!("p={p_pa:.0} Pa exceeds 100 MPa"),
        });
    }
    if t_k < T_CRIT_K {
        // Saturation may refuse the outer edges of the range; only enforce
        // the bound where it computes.
        if let Ok(p_sat) = region4::saturation_pressure(t_k) {
            if p_pa < p_sat {
                return Err(If97Error::Applicability {
                    region: Region::R1,
                    what: format!("p={p_pa:.0} Pa is below psat({t_k:.2} K)"),
                });
            }
        }
    }

    let pi = (p_pa / 1.0e6) / P_STAR_MPA;
    let tau = T_STAR_K / t_k;
    // (7.1 - pi) substitution: each derivative in pi picks up a sign flip,
    // which cancels in the second derivative.
    let a = 7.1 - pi;
    let b = tau - 1.222;

    let mut d = GibbsDerivs::default();
    for term in &tables().region1 {
        let (i, j, n) = (term.i, term.j, term.n);
        let ai = a.powi(i);
        let bj = b.powi(j);
        d.g += n * ai * bj;
        d.g_pi += -n * f64::from(i) * a.powi(i - 1) * bj;
        d.g_pipi += n * f64::from(i) * f64::from(i - 1) * a.powi(i - 2) * bj;
        d.g_tau += n * f64::from(j) * ai * b.powi(j - 1);
        d.g_tautau += n * f64::from(j) * f64::from(j - 1) * ai * b.powi(j - 2);
        d.g_pitau += -n * f64::from(i) * f64::from(j) * a.powi(i - 1) * b.powi(j - 1);
    }

    assemble(Region::R1, t_k, p_pa, pi, tau, &d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::numeric::rel_diff;

    // IAPWS-IF97 Table 5 verification states.
    #[test]
    fn reference_state_300k_3mpa() {
        let p = evaluate(300.0, 3.0e6).unwrap();
        assert!(rel_diff(p.specific_volume, 1.00215168e-3) < 1e-8);
        assert!(rel_diff(p.enthalpy, 115.331273) < 1e-8);
        assert!(rel_diff(p.internal_energy, 112.324818) < 1e-8);
        assert!(rel_diff(p.entropy, 0.392294792) < 1e-8);
        assert!(rel_diff(p.cp, 4.17301218) < 1e-8);
        assert!(rel_diff(p.speed_of_sound, 1507.73921) < 1e-8);
    }

    #[test]
    fn reference_state_300k_80mpa() {
        let p = evaluate(300.0, 80.0e6).unwrap();
        assert!(rel_diff(p.specific_volume, 0.971180894e-3) < 1e-8);
        assert!(rel_diff(p.enthalpy, 184.142828) < 1e-8);
        assert!(rel_diff(p.entropy, 0.368563852) < 1e-7);
        assert!(rel_diff(p.cp, 4.01008987) < 1e-8);
        assert!(rel_diff(p.speed_of_sound, 1634.69054) < 1e-8);
    }

    #[test]
    fn reference_state_500k_3mpa() {
        let p = evaluate(500.0, 3.0e6).unwrap();
        assert!(rel_diff(p.specific_volume, 1.202418e-3) < 1e-6);
        assert!(rel_diff(p.enthalpy, 975.542239) < 1e-8);
        assert!(rel_diff(p.entropy, 2.58041912) < 1e-8);
        assert!(rel_diff(p.cp, 4.65580682) < 1e-8);
        assert!(rel_diff(p.speed_of_sound, 1240.71337) < 1e-8);
    }

    #[test]
    fn cv_stays_below_cp() {
        for (t, p) in [(300.0, 3.0e6), (300.0, 80.0e6), (500.0, 3.0e6)] {
            let props = evaluate(t, p).unwrap();
            assert!(props.cp > props.cv);
        }
    }

    #[test]
    fn ambient_liquid_water() {
        let p = evaluate(293.15, 101_325.0).unwrap();
        assert!(rel_diff(p.density, 998.206) < 1e-4);
    }

    #[test]
    fn rejects_temperature_above_623() {
        let err = evaluate(700.0, 10.0e6).unwrap_err();
        assert!(matches!(
            err,
            If97Error::Applicability {
                region: Region::R1,
                ..
            }
        ));
    }

    #[test]
    fn rejects_pressure_below_saturation() {
        // 500 K: psat ≈ 2.64 MPa; 1 MPa is vapour territory.
        let err = evaluate(500.0, 1.0e6).unwrap_err();
        assert!(matches!(err, If97Error::Applicability { .. }));
    }

    #[test]
    fn rejects_nonpositive_pressure() {
        assert!(matches!(
            evaluate(300.0, 0.0).unwrap_err(),
            If97Error::Domain { .. }
        ));
    }
}
