// sp-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m_s(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

/// Fixed points of the IAPWS-IF97 formulation.
pub mod constants {
    /// Specific gas constant of water [kJ/(kg·K)], common to all regions.
    pub const R_KJ_KG_K: f64 = 0.461_526;

    /// Critical temperature [K].
    pub const T_CRIT_K: f64 = 647.096;

    /// Critical pressure [Pa].
    pub const P_CRIT_PA: f64 = 22.064e6;

    /// Critical density [kg/m³].
    pub const RHO_CRIT_KG_M3: f64 = 322.0;

    /// Critical specific entropy [kJ/(kg·K)]; splits Region 3 into 3a/3b.
    pub const S_CRIT_KJ_KG_K: f64 = 4.412_021_482_234_76;

    /// Critical specific enthalpy [kJ/kg] (rounded; used only for routing guesses).
    pub const H_CRIT_KJ_KG: f64 = 2084.264;

    /// Triple-point temperature [K].
    pub const T_TRIPLE_K: f64 = 273.16;

    /// Triple-point pressure [Pa].
    pub const P_TRIPLE_PA: f64 = 611.657;

    /// Celsius offset [K].
    pub const T_CELSIUS_OFFSET_K: f64 = 273.15;
}

#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + constants::T_CELSIUS_OFFSET_K
}

#[inline]
pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - constants::T_CELSIUS_OFFSET_K
}
