//! Region 4: the saturation line, triple point to critical point.
//!
//! Both directions are closed forms of the same quartic-in-β equation, so
//! the pair round-trips to machine precision.

use crate::error::{If97Error, If97Result};
use crate::region::Region;
use crate::tables::tables;

/// Saturation pressure [Pa] for T [K] in [273.15, 647.096].
pub fn saturation_pressure(t_k: f64) -> If97Result<f64> {
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(If97Error::Domain {
            what: "temperature",
            value: t_k,
        });
    }
    if !(273.15..=647.096).contains(&t_k) {
        return Err(If97Error::Applicability {
            region: Region::R4,
            what: format!("T={t_k:.3} K out of [273.15, 647.096] K"),
        });
    }
    let n = &tables().region4;

    let theta = t_k + n[9] / (t_k - n[10]);
    let a = theta * theta + n[1] * theta + n[2];
    let b = n[3] * theta * theta + n[4] * theta + n[5];
    let c = n[6] * theta * theta + n[7] * theta + n[8];
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        // Cannot happen with intact coefficients; do not clamp.
        return Err(If97Error::NonFinite {
            region: Region::R4,
            what: "saturation discriminant",
        });
    }
    let x = 2.0 * c / (-b + disc.sqrt());
    Ok(1.0e6 * x.powi(4))
}

/// Saturation temperature [K] for p [Pa] in [611.657, 22.064e6].
pub fn saturation_temperature(p_pa: f64) -> If97Result<f64> {
    if !p_pa.is_finite() || p_pa <= 0.0 {
        return Err(If97Error::Domain {
            what: "pressure",
            value: p_pa,
        });
    }
    if !(611.657..=22.064e6).contains(&p_pa) {
        return Err(If97Error::Applicability {
            region: Region::R4,
            what: format!("p={p_pa:.3} Pa out of [611.657, 22.064e6] Pa"),
        });
    }
    let n = &tables().region4;

    let beta = (p_pa / 1.0e6).powf(0.25);
    let e = beta * beta + n[3] * beta + n[6];
    let f = n[1] * beta * beta + n[4] * beta + n[7];
    let g = n[2] * beta * beta + n[5] * beta + n[8];
    let disc = f * f - 4.0 * e * g;
    if disc < 0.0 {
        return Err(If97Error::NonFinite {
            region: Region::R4,
            what: "saturation discriminant",
        });
    }
    let d = 2.0 * g / (-f - disc.sqrt());
    let y = n[10] + d;
    let inner = y * y - 4.0 * (n[9] + n[10] * d);
    if inner < 0.0 {
        return Err(If97Error::NonFinite {
            region: Region::R4,
            what: "saturation discriminant",
        });
    }
    // The positive root of the final quadratic is non-physical.
    Ok(0.5 * (y - inner.sqrt()))
}
