//! Sensible heat, `q = m·c·ΔT`.
//!
//! Inputs use the classroom units: grams, J/(g·°C) and °C. No sign checks are
//! made on any input; the sign of ΔT carries the direction of heat flow.

use serde::{Deserialize, Serialize};
use tc_core::{Energy, EnergyUnit, Real, convert, ensure_finite, joules, round_to};

use crate::error::CalcResult;

/// Specific heat of liquid water used by the virtual lab, J/(g·°C).
pub const WATER_SPECIFIC_HEAT: Real = 4.18;

/// Decimal digits kept in reported values.
pub const REPORT_DECIMALS: u32 = 2;

/// Heat expressed in the four supported units.
///
/// `q_j`, `q_kj`, `q_cal` and `q_kcal` are rounded for output. Anything that
/// derives further quantities should start from `q_j_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatResult {
    pub q_j_raw: Real,
    pub q_j: Real,
    pub q_kj: Real,
    pub q_cal: Real,
    pub q_kcal: Real,
}

impl HeatResult {
    pub fn from_joules(q_j: Real) -> CalcResult<Self> {
        let q_j = ensure_finite(q_j, "heat")?;
        let report = |unit| -> CalcResult<Real> {
            Ok(round_to(
                convert(q_j, EnergyUnit::Joule, unit)?.value,
                REPORT_DECIMALS,
            ))
        };
        Ok(Self {
            q_j_raw: q_j,
            q_j: report(EnergyUnit::Joule)?,
            q_kj: report(EnergyUnit::Kilojoule)?,
            q_cal: report(EnergyUnit::Calorie)?,
            q_kcal: report(EnergyUnit::Kilocalorie)?,
        })
    }

    /// Unrounded heat in the requested unit.
    pub fn raw_in(&self, unit: EnergyUnit) -> CalcResult<Real> {
        Ok(convert(self.q_j_raw, EnergyUnit::Joule, unit)?.value)
    }

    pub fn energy(&self) -> Energy {
        joules(self.q_j_raw)
    }

    pub fn is_released(&self) -> bool {
        self.q_j_raw < 0.0
    }
}

/// `q = mass_g · specific_heat · delta_t`.
pub fn heat(mass_g: Real, specific_heat: Real, delta_t: Real) -> CalcResult<HeatResult> {
    let m = ensure_finite(mass_g, "mass")?;
    let c = ensure_finite(specific_heat, "specific heat")?;
    let dt = ensure_finite(delta_t, "temperature change")?;
    HeatResult::from_joules(m * c * dt)
}

/// Heat read off a coffee-cup calorimeter holding dilute aqueous solution.
///
/// Treats the whole mixture as water and reports the magnitude only, as the
/// lab trial log does.
pub fn solution_heat(total_mass_g: Real, delta_t: Real) -> CalcResult<HeatResult> {
    let dt = ensure_finite(delta_t, "temperature change")?;
    heat(total_mass_g, WATER_SPECIFIC_HEAT, dt.abs())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sign_symmetry(m in -1.0e4_f64..1.0e4, c in 0.0_f64..10.0, dt in -500.0_f64..500.0) {
            let up = heat(m, c, dt).unwrap();
            let down = heat(m, c, -dt).unwrap();
            prop_assert_eq!(up.q_j_raw, -down.q_j_raw);
        }
    }
}
