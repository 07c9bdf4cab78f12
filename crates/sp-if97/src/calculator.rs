//! The dispatcher: input validation, region selection, property assembly.

use crate::classify::{classify_tp, guess_region_hs};
use crate::error::{If97Error, If97Result};
use crate::properties::Properties;
use crate::region::Region;
use crate::{region1, region2, region3, region4, region5};
use sp_core::units::{celsius_to_kelvin, k, kelvin_to_celsius, pa, Pressure, Temperature};

/// Result of an (h,s) query: the full property set plus the recovered
/// state coordinates.
#[derive(Debug, Clone, Copy)]
pub struct HsState {
    pub properties: Properties,
    pub region: Region,
    pub temperature_k: f64,
    pub pressure_pa: f64,
}

impl HsState {
    pub fn temperature(&self) -> Temperature {
        k(self.temperature_k)
    }

    pub fn pressure(&self) -> Pressure {
        pa(self.pressure_pa)
    }

    pub fn temperature_c(&self) -> f64 {
        kelvin_to_celsius(self.temperature_k)
    }
}

fn validate_tp(t_celsius: f64, p_pa: f64) -> If97Result<()> {
    if !t_celsius.is_finite() {
        return Err(If97Error::Domain {
            what: "temperature",
            value: t_celsius,
        });
    }
    if !p_pa.is_finite() {
        return Err(If97Error::Domain {
            what: "pressure",
            value: p_pa,
        });
    }
    if t_celsius < -273.15 {
        return Err(If97Error::Domain {
            what: "temperature below absolute zero [°C]",
            value: t_celsius,
        });
    }
    if t_celsius > 2000.0 {
        return Err(If97Error::Domain {
            what: "temperature above 2000 °C",
            value: t_celsius,
        });
    }
    if p_pa < 611.657 {
        return Err(If97Error::Domain {
            what: "pressure below the triple point [Pa]",
            value: p_pa,
        });
    }
    if p_pa > 100.0e6 {
        return Err(If97Error::Domain {
            what: "pressure above 100 MPa [Pa]",
            value: p_pa,
        });
    }
    Ok(())
}

fn validate_hs(h: f64, s: f64) -> If97Result<()> {
    if !h.is_finite() {
        return Err(If97Error::Domain {
            what: "enthalpy",
            value: h,
        });
    }
    if !s.is_finite() {
        return Err(If97Error::Domain {
            what: "entropy",
            value: s,
        });
    }
    if !(0.0..=5000.0).contains(&h) {
        return Err(If97Error::Domain {
            what: "enthalpy out of [0, 5000] kJ/kg",
            value: h,
        });
    }
    if !(0.0..=15.0).contains(&s) {
        return Err(If97Error::Domain {
            what: "entropy out of [0, 15] kJ/(kg·K)",
            value: s,
        });
    }
    Ok(())
}

fn dispatch(region: Region, t_k: f64, p_pa: f64) -> If97Result<Properties> {
    match region {
        Region::R1 => region1::evaluate(t_k, p_pa),
        Region::R2 => region2::evaluate(t_k, p_pa),
        Region::R3 => region3::evaluate(t_k, p_pa),
        Region::R5 => region5::evaluate(t_k, p_pa),
        // Forced saturation tag: pick a side by comparing p against the
        // saturation line.
        Region::R4 => {
            let liquid_side = match region4::saturation_pressure(t_k) {
                Ok(p_sat) => p_pa >= p_sat,
                Err(_) => false,
            };
            if liquid_side {
                region1::evaluate(t_k, p_pa)
            } else {
                region2::evaluate(t_k, p_pa)
            }
        }
    }
}

/// Compute the full property set for (T [°C], p [Pa]), classifying the
/// region automatically.
pub fn properties_from_tp(t_celsius: f64, p_pa: f64) -> If97Result<(Properties, Region)> {
    properties_from_tp_in(t_celsius, p_pa, None)
}

/// Like [`properties_from_tp`] but with an optional explicit region tag,
/// bypassing the classifier. `Region::R4` forces a saturation side.
pub fn properties_from_tp_in(
    t_celsius: f64,
    p_pa: f64,
    region: Option<Region>,
) -> If97Result<(Properties, Region)> {
    validate_tp(t_celsius, p_pa)?;
    let t_k = celsius_to_kelvin(t_celsius);
    let region = region.unwrap_or_else(|| classify_tp(t_k, p_pa));
    let props = dispatch(region, t_k, p_pa)?;
    Ok((props, region))
}

/// Compute the full property set for (h [kJ/kg], s [kJ/(kg·K)]).
///
/// Only the Region 3 backward equations are implemented; when they refuse
/// the state the error carries a heuristic guess of the region the state
/// belongs to. The dispatcher never retries with a different region.
pub fn properties_from_hs(h: f64, s: f64) -> If97Result<HsState> {
    validate_hs(h, s)?;
    match region3::properties_from_hs(h, s) {
        Ok((p_pa, t_k, properties)) => Ok(HsState {
            properties,
            region: Region::R3,
            temperature_k: t_k,
            pressure_pa: p_pa,
        }),
        Err(e) => Err(If97Error::NotSupported {
            guess: guess_region_hs(h, s),
            what: e.to_string(),
        }),
    }
}

/// Saturation pressure [Pa] for T [K] in [273.16, 647.096].
pub fn saturation_pressure(t_k: f64) -> If97Result<f64> {
    if !t_k.is_finite() {
        return Err(If97Error::Domain {
            what: "temperature",
            value: t_k,
        });
    }
    if !(273.16..=647.096).contains(&t_k) {
        return Err(If97Error::Applicability {
            region: Region::R4,
            what: format!("T={t_k:.3} K out of [273.16, 647.096] K"),
        });
    }
    region4::saturation_pressure(t_k)
}

/// Saturation temperature [K] for p [Pa] in [611.657, 22.064e6].
pub fn saturation_temperature(p_pa: f64) -> If97Result<f64> {
    region4::saturation_temperature(p_pa)
}
