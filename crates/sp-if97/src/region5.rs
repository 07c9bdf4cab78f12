//! Region 5: high-temperature gas, 1073.15–2273.15 K up to 50 MPa.
//!
//! Structure follows Region 2 with T* = 1000 K, p* = 1 MPa and the 2007
//! six-term residual in plain τ powers.

use crate::error::{If97Error, If97Result};
use crate::gibbs::{assemble, GibbsDerivs};
use crate::properties::Properties;
use crate::region::Region;
use crate::tables::tables;

const P_STAR_MPA: f64 = 1.0;
const T_STAR_K: f64 = 1000.0;

/// Compute Region 5 properties for T in Kelvin and p in Pascal.
pub fn evaluate(t_k: f64, p_pa: f64) -> If97Result<Properties> {
    if p_pa <= 0.0 {
        return Err(If97Error::Domain {
            what: "pressure",
            value: p_pa,
        });
    }
    if !(1073.15..=2273.15).contains(&t_k) {
        return Err(If97Error::Applicability {
            region: Region::R5,
            what: format!("T={t_k:.2} K out of [1073.15, 2273.15] K"),
        });
    }
    if p_pa > 50.0e6 {
        return Err(If97Error::Applicability {
            region: Region::R5,
            what: format!("p={p_pa:.0} Pa exceeds 50 MPa"),
        });
    }

    let pi = (p_pa / 1.0e6) / P_STAR_MPA;
    let tau = T_STAR_K / t_k;
    let t = tables();

    let mut d = GibbsDerivs {
        g: pi.ln(),
        g_pi: 1.0 / pi,
        g_pipi: -1.0 / (pi * pi),
        ..Default::default()
    };
    for term in &t.region5_ideal {
        let (j, n) = (term.j, term.n);
        d.g += n * tau.powi(j);
        d.g_tau += n * f64::from(j) * tau.powi(j - 1);
        d.g_tautau += n * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
    }
    for term in &t.region5_residual {
        let (i, j, n) = (term.i, term.j, term.n);
        let pii = pi.powi(i);
        let tj = tau.powi(j);
        d.g += n * pii * tj;
        d.g_pi += n * f64::from(i) * pi.powi(i - 1) * tj;
        d.g_pipi += n * f64::from(i) * f64::from(i - 1) * pi.powi(i - 2) * tj;
        d.g_tau += n * f64::from(j) * pii * tau.powi(j - 1);
        d.g_tautau += n * f64::from(j) * f64::from(j - 1) * pii * tau.powi(j - 2);
        d.g_pitau += n * f64::from(i) * f64::from(j) * pi.powi(i - 1) * tau.powi(j - 1);
    }

    assemble(Region::R5, t_k, p_pa, pi, tau, &d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::numeric::rel_diff;

    // IAPWS-IF97 (2007 revision) Table 42 verification states.
    #[test]
    fn reference_state_1500k_half_mpa() {
        let p = evaluate(1500.0, 0.5e6).unwrap();
        assert!(rel_diff(p.specific_volume, 1.38455090) < 1e-8);
        assert!(rel_diff(p.enthalpy, 5219.76855) < 1e-8);
        assert!(rel_diff(p.internal_energy, 4527.49310) < 1e-8);
        assert!(rel_diff(p.entropy, 9.65408875) < 1e-8);
        assert!(rel_diff(p.cp, 2.61609445) < 1e-8);
        assert!(rel_diff(p.speed_of_sound, 917.068690) < 1e-8);
    }

    #[test]
    fn reference_state_1500k_30mpa() {
        let p = evaluate(1500.0, 30.0e6).unwrap();
        assert!(rel_diff(p.specific_volume, 2.30761299e-2) < 1e-8);
        assert!(rel_diff(p.enthalpy, 5167.23514) < 1e-8);
        assert!(rel_diff(p.entropy, 7.72970133) < 1e-8);
        assert!(rel_diff(p.cp, 2.72724317) < 1e-8);
        assert!(rel_diff(p.speed_of_sound, 928.548002) < 1e-8);
    }

    #[test]
    fn reference_state_2000k_30mpa() {
        let p = evaluate(2000.0, 30.0e6).unwrap();
        assert!(rel_diff(p.specific_volume, 3.11385219e-2) < 1e-8);
        assert!(rel_diff(p.enthalpy, 6571.22604) < 1e-8);
        assert!(rel_diff(p.entropy, 8.53640523) < 1e-8);
        assert!(rel_diff(p.cp, 2.88569882) < 1e-8);
        assert!(rel_diff(p.speed_of_sound, 1067.36948) < 1e-8);
    }

    #[test]
    fn rejects_pressure_above_50mpa() {
        let err = evaluate(1500.0, 60.0e6).unwrap_err();
        assert!(matches!(
            err,
            If97Error::Applicability {
                region: Region::R5,
                ..
            }
        ));
    }

    #[test]
    fn rejects_temperature_outside_band() {
        assert!(evaluate(1000.0, 1.0e6).is_err());
        assert!(evaluate(2300.0, 1.0e6).is_err());
    }
}
