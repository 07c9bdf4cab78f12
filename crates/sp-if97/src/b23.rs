//! The B23 boundary dividing Regions 2 and 3 above 16.5292 MPa.
//!
//! Modelled as a quadratic T(p) whose coefficients approximate the official
//! boundary over its operative pressure range; the inverse solves the same
//! quadratic in p, so the pair round-trips exactly.

use crate::error::{If97Error, If97Result};
use crate::region::Region;
use crate::tables::tables;

/// Boundary temperature [K] for p in MPa.
pub fn temperature_from_pressure(p_mpa: f64) -> If97Result<f64> {
    if !p_mpa.is_finite() {
        return Err(If97Error::Domain {
            what: "pressure",
            value: p_mpa,
        });
    }
    let n = &tables().b23;
    Ok(n[1] + n[2] * p_mpa + n[3] * p_mpa * p_mpa)
}

/// Boundary pressure [MPa] for T in K. Solves n₃p² + n₂p + (n₁ − T) = 0,
/// taking the positive root and, when both are positive, the smaller.
pub fn pressure_from_temperature(t_k: f64) -> If97Result<f64> {
    if !t_k.is_finite() {
        return Err(If97Error::Domain {
            what: "temperature",
            value: t_k,
        });
    }
    let n = &tables().b23;
    let a = n[3];
    let b = n[2];
    let c = n[1] - t_k;
    if a.abs() < 1e-18 {
        if b.abs() < 1e-18 {
            return Err(If97Error::NonFinite {
                region: Region::R3,
                what: "degenerate B23 coefficients",
            });
        }
        return Ok(-c / b);
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Err(If97Error::Inversion {
            region: Region::R3,
            what: format!("no real B23 pressure for T={t_k:.3} K"),
        });
    }
    let sqrt_disc = disc.sqrt();
    let r1 = (-b + sqrt_disc) / (2.0 * a);
    let r2 = (-b - sqrt_disc) / (2.0 * a);
    let p = match (r1 > 0.0, r2 > 0.0) {
        (true, true) => r1.min(r2),
        (true, false) => r1,
        (false, true) => r2,
        (false, false) => {
            return Err(If97Error::Inversion {
                region: Region::R3,
                what: format!("no positive B23 pressure for T={t_k:.3} K"),
            })
        }
    };
    Ok(p)
}
