//! tc-data: read-only reference data for thermochemistry.
//!
//! Provides:
//! - Standard formation enthalpies, bond energies, specific heats,
//!   combustion enthalpies and latent heats (tables)
//! - The `ReferenceData` lookup trait and its built-in implementation
//! - Worked Hess's-law problems
//!
//! Values follow common general-chemistry tables (Chang, Atkins, NIST
//! WebBook) at 25 °C and 1 atm. Everything is immutable; lookup maps are built
//! once per process.

pub mod hess_problems;
pub mod reference;
pub mod tables;

pub use hess_problems::{HessProblem, ReferenceReaction, find_hess_problem, hess_problems};
pub use reference::{ReferenceData, StandardReference};
pub use tables::{
    BondEntry, CombustionEntry, ExampleReaction, FormationEntry, LatentHeatEntry, PhysicalState,
    SpecificHeatEntry, bond_energies, combustion_enthalpies, example_reactions,
    formation_enthalpies, latent_heats, specific_heats,
};
