//! The thermodynamic property record.

use crate::error::{If97Error, If97Result};
use crate::region::Region;
use sp_core::units::{kg_m3, m_s, Density, Velocity};

/// Complete set of thermodynamic properties at a single state.
///
/// Specific enthalpy, entropy and the heat capacities are not part of uom's
/// standard quantity set, so all fields are plain `f64` with fixed units;
/// uom accessors are provided for the quantities that have them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Properties {
    /// Specific volume [m³/kg]
    pub specific_volume: f64,
    /// Density [kg/m³]; `density * specific_volume == 1` to rounding
    pub density: f64,
    /// Specific internal energy [kJ/kg]
    pub internal_energy: f64,
    /// Specific entropy [kJ/(kg·K)]
    pub entropy: f64,
    /// Specific enthalpy [kJ/kg]
    pub enthalpy: f64,
    /// Specific isochoric heat capacity [kJ/(kg·K)]
    pub cv: f64,
    /// Specific isobaric heat capacity [kJ/(kg·K)]; `cp >= cv`
    pub cp: f64,
    /// Speed of sound [m/s]
    pub speed_of_sound: f64,
}

impl Properties {
    pub fn density_si(&self) -> Density {
        kg_m3(self.density)
    }

    pub fn speed_of_sound_si(&self) -> Velocity {
        m_s(self.speed_of_sound)
    }
}

/// Post-computation validation shared by every region.
pub(crate) mod validation {
    use super::*;

    /// Reject non-finite or non-physical results before they reach callers.
    pub fn check(props: Properties, region: Region) -> If97Result<Properties> {
        let fields = [
            ("specific volume", props.specific_volume),
            ("density", props.density),
            ("internal energy", props.internal_energy),
            ("entropy", props.entropy),
            ("enthalpy", props.enthalpy),
            ("cv", props.cv),
            ("cp", props.cp),
            ("speed of sound", props.speed_of_sound),
        ];
        for (what, value) in fields {
            if !value.is_finite() {
                return Err(If97Error::NonFinite { region, what });
            }
        }
        if props.specific_volume <= 0.0 || props.density <= 0.0 {
            return Err(If97Error::NonFinite {
                region,
                what: "specific volume",
            });
        }
        if props.speed_of_sound <= 0.0 {
            return Err(If97Error::NonFinite {
                region,
                what: "speed of sound",
            });
        }
        if props.cp <= 0.0 || props.cv <= 0.0 {
            return Err(If97Error::NonFinite {
                region,
                what: "heat capacity",
            });
        }
        Ok(props)
    }
}
