//! Region 2: superheated vapour, 273.15–1073.15 K up to 100 MPa.

use crate::error::{If97Error, If97Result};
use crate::gibbs::{assemble, GibbsDerivs};
use crate::properties::Properties;
use crate::region::Region;
use crate::region4;
use crate::tables::tables;
use sp_core::units::constants::T_CRIT_K;

const P_STAR_MPA: f64 = 1.0;
const T_STAR_K: f64 = 540.0;
const TAU_SHIFT: f64 = 0.5;

/// Compute Region 2 properties for T in Kelvin and p in Pascal.
pub fn evaluate(t_k: f64, p_pa: f64) -> If97Result<Properties> {
    if p_pa <= 0.0 {
        return Err(If97Error::Domain {
            what: "pressure",
            value: p_pa,
        });
    }
    if t_k < 273.15 {
        return Err(If97Error::Applicability {
            region: Region::R2,
            what: format!("T={t_k:.2} K is below 273.15 K"),
        });
    }
    if t_k > 1073.15 {
        return Err(If97Error::Applicability {
            region: Region::R2,
            what: format!("T={t_k:.2} K exceeds 1073.15 K"),
        });
    }
    if p_pa > 100.0e6 {
        return Err(If97Error::Applicability {
            region: Region::R2,
            what: format!("p={p_pa:.0} Pa exceeds 100 MPa"),
        });
    }
    if t_k < T_CRIT_K {
        if let Ok(p_sat) = region4::saturation_pressure(t_k) {
            if p_pa > p_sat {
                return Err(If97Error::Applicability {
                    region: Region::R2,
                    what: format!("p={p_pa:.0} Pa exceeds psat({t_k:.2} K)"),
                });
            }
        }
    }

    let pi = (p_pa / 1.0e6) / P_STAR_MPA;
    let tau = T_STAR_K / t_k;
    let b = tau - TAU_SHIFT;
    let t = tables();

    let mut d = GibbsDerivs {
        g: pi.ln(),
        g_pi: 1.0 / pi,
        g_pipi: -1.0 / (pi * pi),
        ..Default::default()
    };
    for term in &t.region2_ideal {
        let (j, n) = (term.j, term.n);
        d.g += n * tau.powi(j);
        d.g_tau += n * f64::from(j) * tau.powi(j - 1);
        d.g_tautau += n * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
    }
    // The ideal part has no mixed derivative; g_pitau is residual-only.
    for term in &t.region2_residual {
        let (i, j, n) = (term.i, term.j, term.n);
        let pii = pi.powi(i);
        let bj = b.powi(j);
        d.g += n * pii * bj;
        d.g_pi += n * f64::from(i) * pi.powi(i - 1) * bj;
        d.g_pipi += n * f64::from(i) * f64::from(i - 1) * pi.powi(i - 2) * bj;
        d.g_tau += n * f64::from(j) * pii * b.powi(j - 1);
        d.g_tautau += n * f64::from(j) * f64::from(j - 1) * pii * b.powi(j - 2);
        d.g_pitau += n * f64::from(i) * f64::from(j) * pi.powi(i - 1) * b.powi(j - 1);
    }

    assemble(Region::R2, t_k, p_pa, pi, tau, &d)
}
