//! Region classification.

use crate::region::Region;
use crate::{b23, region4};
use sp_core::units::constants::{H_CRIT_KJ_KG, S_CRIT_KJ_KG_K, T_CRIT_K};

/// Best-effort region tag for (T [K], p [Pa]). Total: every finite input
/// yields a tag; whether the region then accepts the state is its own
/// decision.
pub fn classify_tp(t_k: f64, p_pa: f64) -> Region {
    if t_k > 1073.15 {
        return Region::R5;
    }
    // The saturation line separates Regions 1 and 2 below the critical
    // temperature.
    if t_k < T_CRIT_K {
        if let Ok(p_sat) = region4::saturation_pressure(t_k) {
            return if p_pa >= p_sat { Region::R1 } else { Region::R2 };
        }
    }
    // Between 2 and 3, use B23.
    if let Ok(t_b23) = b23::temperature_from_pressure(p_pa / 1.0e6) {
        return if t_k >= t_b23 { Region::R2 } else { Region::R3 };
    }
    // Fallback heuristic.
    if p_pa >= 16.5292e6 {
        Region::R3
    } else {
        Region::R2
    }
}

/// Coarse region guess for (h [kJ/kg], s [kJ/(kg·K)]) inputs, used to tag
/// errors when the Region 3 backward path refuses. The critical point acts
/// as the router.
pub fn guess_region_hs(h: f64, s: f64) -> Region {
    if h < H_CRIT_KJ_KG && s < S_CRIT_KJ_KG_K {
        Region::R1
    } else if h > H_CRIT_KJ_KG || s > S_CRIT_KJ_KG_K {
        Region::R2
    } else {
        Region::R3
    }
}
