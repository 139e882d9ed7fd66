//! Reference lookups.
//!
//! Formation enthalpies and bond energies match their key exactly, since
//! state annotations like `(g)` and `(l)` change the value. Specific heats are
//! looked up by a case-insensitive substring of the substance label, so
//! `"air"` finds `"Air (H2O)"`.

use std::collections::HashMap;
use std::sync::LazyLock;

use tc_calc::LineItem;
use tc_core::Real;

use crate::tables::{
    CombustionEntry, LatentHeatEntry, SpecificHeatEntry, bond_energies, combustion_enthalpies,
    formation_enthalpies, latent_heats, specific_heats,
};

/// Source of per-mole reference values.
///
/// A miss is `None`. A stored zero (an element in its standard state) is
/// `Some(0.0)` and is a hit.
pub trait ReferenceData {
    /// ΔHf° in kJ/mol, exact formula match.
    fn formation_enthalpy(&self, formula: &str) -> Option<Real>;

    /// Average bond energy in kJ/mol, exact bond key match.
    fn bond_energy(&self, bond: &str) -> Option<Real>;

    /// Specific heat in J/(g·°C) of the first substance whose label contains
    /// `query`, ignoring case.
    fn specific_heat(&self, query: &str) -> Option<Real>;

    /// Line item for a formation-enthalpy estimate. A miss leaves the value
    /// empty so the estimate reports the formula as incomplete.
    fn formation_item(&self, formula: &str, coefficient: Real) -> LineItem {
        LineItem::partial(formula, Some(coefficient), self.formation_enthalpy(formula))
    }

    /// Line item for a bond-energy estimate.
    fn bond_item(&self, bond: &str, count: Real) -> LineItem {
        LineItem::partial(bond, Some(count), self.bond_energy(bond))
    }
}

/// The built-in tables behind hash maps keyed by formula and bond.
#[derive(Debug)]
pub struct StandardReference {
    formation: HashMap<&'static str, Real>,
    bonds: HashMap<&'static str, Real>,
    specific_heats: &'static [SpecificHeatEntry],
}

static STANDARD: LazyLock<StandardReference> = LazyLock::new(StandardReference::build);

impl StandardReference {
    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static StandardReference {
        &STANDARD
    }

    fn build() -> Self {
        let formation = formation_enthalpies()
            .iter()
            .map(|e| (e.formula, e.hf))
            .collect();

        let mut bonds = HashMap::new();
        for entry in bond_energies() {
            // first listing of a bond key wins
            bonds.entry(entry.bond).or_insert(entry.energy);
        }

        Self {
            formation,
            bonds,
            specific_heats: specific_heats(),
        }
    }

    pub fn combustion_enthalpy(&self, formula: &str) -> Option<&'static CombustionEntry> {
        combustion_enthalpies().iter().find(|e| e.formula == formula)
    }

    pub fn latent_heat(&self, substance: &str) -> Option<&'static LatentHeatEntry> {
        latent_heats().iter().find(|e| e.substance == substance)
    }

    pub fn specific_heat_entry(&self, query: &str) -> Option<&'static SpecificHeatEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.specific_heats
            .iter()
            .find(|e| e.substance.to_lowercase().contains(&needle))
    }
}

impl ReferenceData for StandardReference {
    fn formation_enthalpy(&self, formula: &str) -> Option<Real> {
        self.formation.get(formula).copied()
    }

    fn bond_energy(&self, bond: &str) -> Option<Real> {
        self.bonds.get(bond).copied()
    }

    fn specific_heat(&self, query: &str) -> Option<Real> {
        self.specific_heat_entry(query).map(|e| e.c)
    }
}
