//! Viscosity and thermal conductivity correlations.

use crate::error::{TransportError, TransportResult};

/// Reference viscosity of liquid water at 20 °C [Pa·s].
const MU_20C_PA_S: f64 = 1.002e-3;
/// Reference density of liquid water at 20 °C [kg/m³].
const RHO_20C_KG_M3: f64 = 998.2;
/// Reference thermal conductivity of liquid water at 20 °C [W/(m·K)].
const LAMBDA_20C_W_M_K: f64 = 0.603;

fn validate(t_k: f64, rho: f64) -> TransportResult<()> {
    if !(t_k > 0.0) {
        return Err(TransportError::NonPositive {
            what: "temperature",
            value: t_k,
        });
    }
    if !(rho > 0.0) {
        return Err(TransportError::NonPositive {
            what: "density",
            value: rho,
        });
    }
    Ok(())
}

/// Dynamic viscosity μ [Pa·s] at (T [K], ρ [kg/m³]).
pub fn dynamic_viscosity(t_k: f64, rho: f64) -> TransportResult<f64> {
    validate(t_k, rho)?;

    // Liquid branch: Arrhenius temperature dependence anchored at 20 °C.
    if t_k < 373.15 && rho > 500.0 {
        let mut mu = MU_20C_PA_S * (1700.0 * (1.0 / t_k - 1.0 / 293.15)).exp();
        if rho > 998.0 {
            mu *= (rho / RHO_20C_KG_M3).powf(0.1);
        }
        return Ok(mu);
    }

    // Steam branch: Sutherland-type law with a low-density correction.
    let mut mu = 1.8e-5 * (t_k / 288.0).powf(0.7);
    if rho < 100.0 {
        mu *= (rho / 0.5).powf(0.1);
    }
    Ok(mu)
}

/// Thermal conductivity λ [W/(m·K)] at (T [K], ρ [kg/m³]).
pub fn thermal_conductivity(t_k: f64, rho: f64) -> TransportResult<f64> {
    validate(t_k, rho)?;

    if rho > 500.0 {
        let mut lambda = LAMBDA_20C_W_M_K + 0.001 * (t_k - 293.15);
        if rho > 998.0 {
            lambda *= (rho / RHO_20C_KG_M3).powf(0.05);
        }
        return Ok(lambda);
    }

    let mut lambda = 0.02 + 0.0001 * (t_k - 273.15);
    if rho < 100.0 {
        lambda *= (rho / 0.5).powf(0.1);
    }
    Ok(lambda)
}

/// Kinematic viscosity ν = μ/ρ [m²/s] at (T [K], ρ [kg/m³]).
pub fn kinematic_viscosity(t_k: f64, rho: f64) -> TransportResult<f64> {
    let mu = dynamic_viscosity(t_k, rho)?;
    Ok(mu / rho)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_liquid_viscosity_near_reference() {
        let mu = dynamic_viscosity(293.15, 998.2).unwrap();
        assert!((mu - 1.002e-3).abs() / 1.002e-3 < 0.02);
    }

    #[test]
    fn liquid_viscosity_falls_with_temperature() {
        let cold = dynamic_viscosity(283.15, 999.7).unwrap();
        let warm = dynamic_viscosity(333.15, 983.2).unwrap();
        assert!(cold > warm);
    }

    #[test]
    fn steam_viscosity_rises_with_temperature() {
        let low = dynamic_viscosity(400.0, 0.6).unwrap();
        let high = dynamic_viscosity(800.0, 0.3).unwrap();
        assert!(high > low);
        assert!(low > 5.0e-6 && low < 5.0e-5);
    }

    #[test]
    fn conductivity_branches_are_plausible() {
        let liquid = thermal_conductivity(293.15, 998.2).unwrap();
        assert!((liquid - 0.603).abs() < 0.01);
        let steam = thermal_conductivity(400.0, 0.6).unwrap();
        assert!(steam > 0.0 && steam < 0.1);
    }

    #[test]
    fn kinematic_is_dynamic_over_density() {
        let mu = dynamic_viscosity(293.15, 998.2).unwrap();
        let nu = kinematic_viscosity(293.15, 998.2).unwrap();
        assert!((nu - mu / 998.2).abs() < 1e-18);
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        assert!(dynamic_viscosity(0.0, 998.0).is_err());
        assert!(dynamic_viscosity(300.0, -1.0).is_err());
        assert!(thermal_conductivity(-5.0, 998.0).is_err());
        assert!(kinematic_viscosity(300.0, 0.0).is_err());
    }
}
