//! Two bodies reaching thermal equilibrium with no heat lost to the outside.

use serde::{Deserialize, Serialize};
use tc_core::{Real, ensure_finite};

use crate::error::{CalcError, CalcResult};

/// One body in a mixing problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixBody {
    pub mass_g: Real,
    /// J/(g·°C)
    pub specific_heat: Real,
    /// °C
    pub temp_c: Real,
}

impl MixBody {
    pub fn new(mass_g: Real, specific_heat: Real, temp_c: Real) -> Self {
        Self {
            mass_g,
            specific_heat,
            temp_c,
        }
    }

    /// Heat capacity `m·c` in J/°C.
    pub fn heat_capacity(&self) -> Real {
        self.mass_g * self.specific_heat
    }
}

/// Equilibrium temperature plus the heat each body took up (negative = gave off).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixOutcome {
    pub t_final_c: Real,
    pub q_first_j: Real,
    pub q_second_j: Real,
}

/// `T_final = (m1·c1·T1 + m2·c2·T2) / (m1·c1 + m2·c2)`.
pub fn final_temperature(
    m1: Real,
    c1: Real,
    t1: Real,
    m2: Real,
    c2: Real,
    t2: Real,
) -> CalcResult<Real> {
    let inputs = [
        (m1, "m1"),
        (c1, "c1"),
        (t1, "T1"),
        (m2, "m2"),
        (c2, "c2"),
        (t2, "T2"),
    ];
    for (v, what) in inputs {
        ensure_finite(v, what)?;
    }

    let cap1 = ensure_finite(m1 * c1, "m1·c1")?;
    let cap2 = ensure_finite(m2 * c2, "m2·c2")?;
    let denominator = ensure_finite(cap1 + cap2, "m1·c1 + m2·c2")?;
    if denominator == 0.0 {
        return Err(CalcError::invalid("total heat capacity is zero"));
    }

    let t_final = (cap1 * t1 + cap2 * t2) / denominator;
    ensure_finite(t_final, "T_final").map_err(CalcError::from)
}

pub fn mix(first: MixBody, second: MixBody) -> CalcResult<MixOutcome> {
    let t_final_c = final_temperature(
        first.mass_g,
        first.specific_heat,
        first.temp_c,
        second.mass_g,
        second.specific_heat,
        second.temp_c,
    )?;
    let q_first_j = first.heat_capacity() * (t_final_c - first.temp_c);
    let q_second_j = second.heat_capacity() * (t_final_c - second.temp_c);
    Ok(MixOutcome {
        t_final_c,
        q_first_j: ensure_finite(q_first_j, "q1")?,
        q_second_j: ensure_finite(q_second_j, "q2")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_water_masses_meet_halfway() {
        let t = final_temperature(100.0, 4.18, 80.0, 100.0, 4.18, 20.0).unwrap();
        assert!((t - 50.0).abs() < 1e-12);
    }

    #[test]
    fn hot_metal_in_water() {
        // 50 g iron at 100 °C dropped into 200 g water at 25 °C
        let t = final_temperature(50.0, 0.449, 100.0, 200.0, 4.18, 25.0).unwrap();
        assert!(t > 25.0 && t < 27.0, "got {t}");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = final_temperature(0.0, 4.18, 80.0, 10.0, 0.0, 20.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test]
    fn overflowing_capacity_is_rejected() {
        let err = final_temperature(1e200, 1e200, 10.0, 1.0, 1.0, 20.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));

        let err = final_temperature(1e300, 1.0, 1e10, 1e300, 1.0, 1e10).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(final_temperature(1.0, 1.0, f64::NAN, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn heat_is_conserved() {
        let out = mix(
            MixBody::new(50.0, 0.385, 90.0),
            MixBody::new(150.0, 4.18, 22.0),
        )
        .unwrap();
        assert!(out.q_first_j < 0.0);
        assert!(out.q_second_j > 0.0);
        assert!((out.q_first_j + out.q_second_j).abs() < 1e-9);
    }
}
