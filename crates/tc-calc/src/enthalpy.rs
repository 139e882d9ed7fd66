//! Reaction enthalpy estimated from tabulated reference values.
//!
//! Two routes:
//! - **Formation**: `ΔH = Σ n·ΔHf(products) − Σ n·ΔHf(reactants)`
//! - **Bond energy**: `ΔH = Σ n·E(broken) − Σ n·E(formed)`
//!
//! Reference values are supplied by the caller. A line item whose value is
//! `None` is incomplete; `Some(0.0)` is a real value (elements in their
//! standard state) and must never be treated as missing.

use serde::{Deserialize, Serialize};
use tc_core::{Real, ensure_finite};

use crate::error::{CalcError, CalcResult};

/// One stoichiometric term: a compound (or bond type), how many, and its
/// per-mole reference energy in kJ/mol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub key: String,
    pub coefficient: Option<Real>,
    pub value: Option<Real>,
}

impl LineItem {
    pub fn new(key: impl Into<String>, coefficient: Real, value: Real) -> Self {
        Self {
            key: key.into(),
            coefficient: Some(coefficient),
            value: Some(value),
        }
    }

    pub fn partial(key: impl Into<String>, coefficient: Option<Real>, value: Option<Real>) -> Self {
        Self {
            key: key.into(),
            coefficient,
            value,
        }
    }

    fn contribution(&self) -> CalcResult<Real> {
        let coefficient = self.coefficient.ok_or_else(|| CalcError::IncompleteLineItem {
            key: self.key.clone(),
            missing: "coefficient",
        })?;
        let value = self.value.ok_or_else(|| CalcError::IncompleteLineItem {
            key: self.key.clone(),
            missing: "reference value",
        })?;

        let coefficient = ensure_finite(coefficient, "coefficient")?;
        let value = ensure_finite(value, "reference value")?;
        if coefficient <= 0.0 {
            return Err(CalcError::invalid(format!(
                "coefficient for '{}' must be positive",
                self.key
            )));
        }
        Ok(coefficient * value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Exothermic,
    Endothermic,
}

impl ReactionKind {
    /// Negative ΔH is exothermic; zero counts as endothermic.
    pub fn classify(delta_h: Real) -> Self {
        if delta_h < 0.0 {
            ReactionKind::Exothermic
        } else {
            ReactionKind::Endothermic
        }
    }
}

/// Intermediate sums kept for explaining the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Breakdown {
    Formation {
        sum_products: Real,
        sum_reactants: Real,
    },
    BondEnergy {
        energy_broken: Real,
        energy_formed: Real,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnthalpyEstimate {
    /// kJ per mole of reaction as written
    pub delta_h: Real,
    pub kind: ReactionKind,
    pub breakdown: Breakdown,
}

fn weighted_sum(items: &[LineItem]) -> CalcResult<Real> {
    items.iter().map(LineItem::contribution).sum()
}

pub fn from_formation_enthalpies(
    products: &[LineItem],
    reactants: &[LineItem],
) -> CalcResult<EnthalpyEstimate> {
    let sum_products = weighted_sum(products)?;
    let sum_reactants = weighted_sum(reactants)?;
    let delta_h = sum_products - sum_reactants;

    Ok(EnthalpyEstimate {
        delta_h,
        kind: ReactionKind::classify(delta_h),
        breakdown: Breakdown::Formation {
            sum_products,
            sum_reactants,
        },
    })
}

/// Breaking bonds costs energy, forming them releases it.
pub fn from_bond_energies(
    bonds_broken: &[LineItem],
    bonds_formed: &[LineItem],
) -> CalcResult<EnthalpyEstimate> {
    let energy_broken = weighted_sum(bonds_broken)?;
    let energy_formed = weighted_sum(bonds_formed)?;
    let delta_h = energy_broken - energy_formed;

    Ok(EnthalpyEstimate {
        delta_h,
        kind: ReactionKind::classify(delta_h),
        breakdown: Breakdown::BondEnergy {
            energy_broken,
            energy_formed,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methane_combustion_from_formation() {
        let products = [
            LineItem::new("CO2(g)", 1.0, -393.5),
            LineItem::new("H2O(l)", 2.0, -285.8),
        ];
        let reactants = [LineItem::new("CH4(g)", 1.0, -74.8)];
        let est = from_formation_enthalpies(&products, &reactants).unwrap();

        assert!((est.delta_h - (-890.3)).abs() < 1e-9);
        assert_eq!(est.kind, ReactionKind::Exothermic);
        match est.breakdown {
            Breakdown::Formation {
                sum_products,
                sum_reactants,
            } => {
                assert!((sum_products - (-965.1)).abs() < 1e-9);
                assert!((sum_reactants - (-74.8)).abs() < 1e-9);
            }
            other => panic!("unexpected breakdown {other:?}"),
        }
    }

    #[test]
    fn zero_reference_value_is_present() {
        let products = [LineItem::new("CO2(g)", 1.0, -393.5)];
        let reactants = [
            LineItem::new("C(s)", 1.0, 0.0),
            LineItem::new("O2(g)", 1.0, 0.0),
        ];
        let est = from_formation_enthalpies(&products, &reactants).unwrap();
        assert!((est.delta_h - (-393.5)).abs() < 1e-12);
    }

    #[test]
    fn missing_value_is_incomplete() {
        let products = [LineItem::partial("XeF4(s)", Some(1.0), None)];
        let err = from_formation_enthalpies(&products, &[]).unwrap_err();
        assert_eq!(
            err,
            CalcError::IncompleteLineItem {
                key: "XeF4(s)".into(),
                missing: "reference value"
            }
        );

        let reactants = [LineItem::partial("CH4(g)", None, Some(-74.8))];
        let err = from_formation_enthalpies(&[], &reactants).unwrap_err();
        assert!(matches!(
            err,
            CalcError::IncompleteLineItem {
                missing: "coefficient",
                ..
            }
        ));
    }

    #[test]
    fn non_positive_coefficient_is_invalid() {
        let products = [LineItem::new("CO2(g)", 0.0, -393.5)];
        let err = from_formation_enthalpies(&products, &[]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test]
    fn methane_combustion_from_bonds() {
        let broken = [LineItem::new("C-H", 4.0, 413.0), LineItem::new("O=O", 2.0, 495.0)];
        let formed = [LineItem::new("C=O", 2.0, 799.0), LineItem::new("O-H", 4.0, 463.0)];
        let est = from_bond_energies(&broken, &formed).unwrap();

        // 2642 - 3450
        assert_eq!(est.delta_h, -808.0);
        assert_eq!(est.kind, ReactionKind::Exothermic);
        assert_eq!(
            est.breakdown,
            Breakdown::BondEnergy {
                energy_broken: 2642.0,
                energy_formed: 3450.0
            }
        );
    }

    #[test]
    fn zero_delta_h_is_endothermic() {
        assert_eq!(ReactionKind::classify(0.0), ReactionKind::Endothermic);
        assert_eq!(ReactionKind::classify(178.3), ReactionKind::Endothermic);
        assert_eq!(ReactionKind::classify(-0.1), ReactionKind::Exothermic);
    }

    #[test]
    fn empty_sides_sum_to_zero() {
        let est = from_bond_energies(&[], &[]).unwrap();
        assert_eq!(est.delta_h, 0.0);
    }
}
