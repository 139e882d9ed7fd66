// tc-core/src/units.rs

use core::fmt;
use core::str::FromStr;

use uom::si::f64::{
    Energy as UomEnergy, Mass as UomMass, TemperatureInterval as UomTemperatureInterval,
};

use crate::error::{TcError, TcResult};
use crate::numeric::{Real, ensure_finite};

// Public canonical SI types (f64)
pub type Energy = UomEnergy;
pub type Mass = UomMass;
pub type TempInterval = UomTemperatureInterval;

#[inline]
pub fn joules(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v)
}

#[inline]
pub fn grams(v: f64) -> Mass {
    use uom::si::mass::gram;
    Mass::new::<gram>(v)
}

#[inline]
pub fn delta_c(v: f64) -> TempInterval {
    use uom::si::temperature_interval::degree_celsius;
    TempInterval::new::<degree_celsius>(v)
}

pub mod constants {
    /// Thermochemical calorie. Every other energy factor derives from this.
    pub const CAL_TO_J: f64 = 4.184;
    pub const J_TO_CAL: f64 = 1.0 / CAL_TO_J;
    pub const KCAL_TO_KJ: f64 = CAL_TO_J;
    /// ~0.239
    pub const KJ_TO_KCAL: f64 = J_TO_CAL;
    pub const KILO: f64 = 1000.0;
}

/// Energy units recognised by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Calorie,
    Kilocalorie,
}

impl EnergyUnit {
    pub const ALL: [EnergyUnit; 4] = [
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Calorie,
        EnergyUnit::Kilocalorie,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Joule => "J",
            Self::Kilojoule => "kJ",
            Self::Calorie => "cal",
            Self::Kilocalorie => "kcal",
        }
    }

    /// Size of one unit expressed in joules.
    fn joules_per_unit(self) -> Real {
        use constants::{CAL_TO_J, KILO};
        match self {
            Self::Joule => 1.0,
            Self::Kilojoule => KILO,
            Self::Calorie => CAL_TO_J,
            Self::Kilocalorie => KILO * CAL_TO_J,
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for EnergyUnit {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "j" | "joule" => Ok(Self::Joule),
            "kj" | "kilojoule" => Ok(Self::Kilojoule),
            "cal" | "calorie" => Ok(Self::Calorie),
            "kcal" | "kilocalorie" => Ok(Self::Kilocalorie),
            _ => Err(TcError::InvalidInput {
                what: "unrecognised energy unit",
            }),
        }
    }
}

/// A magnitude tagged with its energy unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyQuantity {
    pub value: Real,
    pub unit: EnergyUnit,
}

impl EnergyQuantity {
    pub fn new(value: Real, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    pub fn to(self, unit: EnergyUnit) -> TcResult<Self> {
        convert(self.value, self.unit, unit)
    }

    pub fn to_energy(self) -> Energy {
        joules(self.value * self.unit.joules_per_unit())
    }

    pub fn from_energy(energy: Energy, unit: EnergyUnit) -> Self {
        use uom::si::energy::joule;
        Self {
            value: energy.get::<joule>() / unit.joules_per_unit(),
            unit,
        }
    }
}

impl fmt::Display for EnergyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Convert `value` between energy units.
///
/// Every pair is routed through joules using [`constants::CAL_TO_J`] and the
/// kilo prefix, so `A -> B -> A` reproduces the input up to rounding error.
pub fn convert(value: Real, from: EnergyUnit, to: EnergyUnit) -> TcResult<EnergyQuantity> {
    let value = ensure_finite(value, "energy value")?;
    if from == to {
        return Ok(EnergyQuantity::new(value, to));
    }
    let converted = value * from.joules_per_unit() / to.joules_per_unit();
    Ok(EnergyQuantity::new(converted, to))
}

/// Same as [`convert`] but with unit names such as `"kJ"` or `"kcal"`.
pub fn convert_named(value: Real, from: &str, to: &str) -> TcResult<EnergyQuantity> {
    let unsupported = || TcError::UnsupportedConversion {
        from: from.to_string(),
        to: to.to_string(),
    };
    let from_unit: EnergyUnit = from.parse().map_err(|_| unsupported())?;
    let to_unit: EnergyUnit = to.parse().map_err(|_| unsupported())?;
    convert(value, from_unit, to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _e = joules(4.184);
        let _m = grams(100.0);
        let _dt = delta_c(-5.0);
    }

    #[test]
    fn kcal_to_kj_uses_fixed_constant() {
        let q = convert(1.0, EnergyUnit::Kilocalorie, EnergyUnit::Kilojoule).unwrap();
        assert!((q.value - 4.184).abs() < 1e-12);
        let j = convert(1.0, EnergyUnit::Kilocalorie, EnergyUnit::Joule).unwrap();
        assert!((j.value - 4184.0).abs() < 1e-9);
    }

    #[test]
    fn kj_to_kcal_is_about_0_239() {
        let q = convert(1.0, EnergyUnit::Kilojoule, EnergyUnit::Kilocalorie).unwrap();
        assert!((q.value - 0.239).abs() < 1e-4);
        assert_eq!(q.unit, EnergyUnit::Kilocalorie);
    }

    #[test]
    fn identity_is_unchanged() {
        let q = convert(0.1 + 0.2, EnergyUnit::Calorie, EnergyUnit::Calorie).unwrap();
        assert_eq!(q.value, 0.1 + 0.2);
    }

    #[test]
    fn every_pair_round_trips() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-6,
        };
        for from in EnergyUnit::ALL {
            for to in EnergyUnit::ALL {
                let there = convert(-890.3, from, to).unwrap();
                let back = there.to(from).unwrap();
                assert!(nearly_equal(back.value, -890.3, tol), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn rejects_non_finite() {
        let err = convert(f64::NAN, EnergyUnit::Joule, EnergyUnit::Calorie).unwrap_err();
        assert!(matches!(err, TcError::NonFinite { .. }));
    }

    #[test]
    fn named_units() {
        let q = convert_named(2.0, "kJ", "J").unwrap();
        assert_eq!(q.value, 2000.0);

        let err = convert_named(2.0, "kJ", "BTU").unwrap_err();
        assert_eq!(
            err,
            TcError::UnsupportedConversion {
                from: "kJ".into(),
                to: "BTU".into()
            }
        );
    }

    #[test]
    fn uom_bridge() {
        use uom::si::energy::joule;
        let e = EnergyQuantity::new(1.0, EnergyUnit::Kilocalorie).to_energy();
        assert!((e.get::<joule>() - 4184.0).abs() < 1e-9);

        let back = EnergyQuantity::from_energy(e, EnergyUnit::Calorie);
        assert!((back.value - 1000.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn unit() -> impl Strategy<Value = EnergyUnit> {
        prop::sample::select(EnergyUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn round_trip_within_tolerance(x in -1.0e9_f64..1.0e9_f64, a in unit(), b in unit()) {
            let there = convert(x, a, b).unwrap();
            let back = convert(there.value, b, a).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-6 };
            prop_assert!(nearly_equal(back.value, x, tol));
        }
    }
}
