//! tc-calc: pure thermochemical calculations.
//!
//! Provides:
//! - Sensible heat `q = m·c·ΔT` with multi-unit reporting
//! - Calorimetric mixing of two bodies
//! - Reaction equation validation and compound parsing
//! - Reaction enthalpy from formation enthalpies or bond energies
//! - Hess's-law combination of reference steps
//! - Mole helpers for turning calorimetry readings into molar quantities
//!
//! Every function here is synchronous and side-effect free, so results can be
//! computed from any number of threads without coordination.
//!
//! # Example
//!
//! ```
//! use tc_calc::{LineItem, from_formation_enthalpies, heat};
//!
//! let q = heat(100.0, 4.18, 10.0).unwrap();
//! assert_eq!(q.q_kj, 4.18);
//!
//! let products = [LineItem::new("CO2(g)", 1.0, -393.5), LineItem::new("H2O(l)", 2.0, -285.8)];
//! let reactants = [LineItem::new("CH4(g)", 1.0, -74.8)];
//! let est = from_formation_enthalpies(&products, &reactants).unwrap();
//! assert!((est.delta_h + 890.3).abs() < 1e-9);
//! ```

pub mod enthalpy;
pub mod equation;
pub mod error;
pub mod heat;
pub mod hess;
pub mod mixing;
pub mod stoich;

// Re-exports for ergonomics
pub use enthalpy::{
    Breakdown, EnthalpyEstimate, LineItem, ReactionKind, from_bond_energies,
    from_formation_enthalpies,
};
pub use equation::{
    Arrow, EquationCheck, EquationIssue, ParsedCompound, ParsedEquation, parse_compound,
    parse_equation, validate,
};
pub use error::{CalcError, CalcResult};
pub use heat::{HeatResult, WATER_SPECIFIC_HEAT, heat, solution_heat};
pub use hess::{DEFAULT_MATCH_TOLERANCE, HessOutcome, ReactionStep, check, combine, verify};
pub use mixing::{MixBody, MixOutcome, final_temperature, mix};
pub use stoich::{mass_from_moles, molar_enthalpy_kj, moles, reaction_heat_kj};
