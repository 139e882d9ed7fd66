//! Static reference tables. All energies in kJ/mol unless noted.

use serde::Serialize;
use tc_calc::ReactionKind;
use tc_core::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalState {
    Gas,
    Liquid,
    Solid,
    Aqueous,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormationEntry {
    pub formula: &'static str,
    pub name: &'static str,
    pub hf: Real,
    pub state: PhysicalState,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondEntry {
    pub bond: &'static str,
    pub energy: Real,
    pub description: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecificHeatEntry {
    pub substance: &'static str,
    /// J/(g·°C)
    pub c: Real,
    pub state: PhysicalState,
    pub common: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombustionEntry {
    pub formula: &'static str,
    pub name: &'static str,
    pub hc: Real,
    pub application: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatentHeatEntry {
    pub substance: &'static str,
    pub name: &'static str,
    pub h_fus: Real,
    pub h_vap: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExampleReaction {
    pub equation: &'static str,
    pub delta_h: Real,
    pub name: &'static str,
    pub application: &'static str,
    pub kind: ReactionKind,
}

macro_rules! formation {
    ($formula:expr, $name:expr, $hf:expr, $state:ident) => {
        FormationEntry {
            formula: $formula,
            name: $name,
            hf: $hf,
            state: PhysicalState::$state,
        }
    };
}

const FORMATION_ENTHALPIES: [FormationEntry; 38] = [
    // Elements in their standard state
    formation!("H2(g)", "Hidrogen", 0.0, Gas),
    formation!("O2(g)", "Oksigen", 0.0, Gas),
    formation!("N2(g)", "Nitrogen", 0.0, Gas),
    formation!("C(s)", "Karbon (grafit)", 0.0, Solid),
    formation!("Fe(s)", "Besi", 0.0, Solid),
    // Gas
    formation!("H2O(g)", "Uap air", -241.8, Gas),
    formation!("CO2(g)", "Karbon dioksida", -393.5, Gas),
    formation!("CO(g)", "Karbon monoksida", -110.5, Gas),
    formation!("NH3(g)", "Amonia", -46.1, Gas),
    formation!("NO(g)", "Nitrogen monoksida", 90.3, Gas),
    formation!("NO2(g)", "Nitrogen dioksida", 33.2, Gas),
    formation!("SO2(g)", "Sulfur dioksida", -296.8, Gas),
    formation!("SO3(g)", "Sulfur trioksida", -395.7, Gas),
    formation!("H2S(g)", "Hidrogen sulfida", -20.6, Gas),
    formation!("HCl(g)", "Hidrogen klorida", -92.3, Gas),
    formation!("HBr(g)", "Hidrogen bromida", -36.4, Gas),
    formation!("HI(g)", "Hidrogen iodida", 26.5, Gas),
    formation!("CH4(g)", "Metana", -74.8, Gas),
    formation!("C2H6(g)", "Etana", -84.7, Gas),
    formation!("C3H8(g)", "Propana", -103.8, Gas),
    formation!("C2H4(g)", "Etena", 52.3, Gas),
    formation!("C2H2(g)", "Etuna (asetilena)", 226.7, Gas),
    // Liquid
    formation!("H2O(l)", "Air", -285.8, Liquid),
    formation!("CH3OH(l)", "Metanol", -238.7, Liquid),
    formation!("C2H5OH(l)", "Etanol", -277.7, Liquid),
    formation!("C6H6(l)", "Benzena", 49.0, Liquid),
    formation!("CCl4(l)", "Karbon tetraklorida", -135.4, Liquid),
    formation!("CHCl3(l)", "Kloroform", -134.5, Liquid),
    // Aqueous
    formation!("HCl(aq)", "Asam klorida", -167.2, Aqueous),
    formation!("HNO3(aq)", "Asam nitrat", -207.4, Aqueous),
    formation!("H2SO4(aq)", "Asam sulfat", -909.3, Aqueous),
    formation!("NaOH(aq)", "Natrium hidroksida", -470.1, Aqueous),
    // Solid
    formation!("CaCO3(s)", "Kalsium karbonat", -1206.9, Solid),
    formation!("CaO(s)", "Kalsium oksida", -635.1, Solid),
    formation!("Fe2O3(s)", "Besi(III) oksida", -824.2, Solid),
    formation!("Al2O3(s)", "Aluminium oksida", -1675.7, Solid),
    formation!("NaCl(s)", "Natrium klorida", -411.2, Solid),
    formation!("MgO(s)", "Magnesium oksida", -601.7, Solid),
];

macro_rules! bond {
    ($bond:expr, $energy:expr, $desc:expr) => {
        BondEntry {
            bond: $bond,
            energy: $energy,
            description: $desc,
            note: None,
        }
    };
    ($bond:expr, $energy:expr, $desc:expr, $note:expr) => {
        BondEntry {
            bond: $bond,
            energy: $energy,
            description: $desc,
            note: Some($note),
        }
    };
}

/// `C=O` appears twice; lookups by bond key return the first (ketone) value.
const BOND_ENERGIES: [BondEntry; 20] = [
    bond!("H-H", 436.0, "Ikatan hidrogen-hidrogen"),
    bond!("C-H", 413.0, "Ikatan karbon-hidrogen"),
    bond!("C-C", 348.0, "Ikatan tunggal karbon-karbon"),
    bond!("C=C", 614.0, "Ikatan rangkap dua karbon"),
    bond!("C≡C", 839.0, "Ikatan rangkap tiga karbon"),
    bond!("C-O", 358.0, "Ikatan karbon-oksigen"),
    bond!("C=O", 799.0, "Ikatan rangkap karbon-oksigen (keton)"),
    bond!("C=O", 745.0, "Ikatan rangkap C=O (CO2)", "dalam CO2"),
    bond!("O-H", 463.0, "Ikatan oksigen-hidrogen"),
    bond!("O=O", 495.0, "Ikatan oksigen-oksigen"),
    bond!("N-H", 391.0, "Ikatan nitrogen-hidrogen"),
    bond!("N≡N", 941.0, "Ikatan rangkap tiga nitrogen"),
    bond!("Cl-Cl", 243.0, "Ikatan klorin-klorin"),
    bond!("Br-Br", 193.0, "Ikatan bromin-bromin"),
    bond!("I-I", 151.0, "Ikatan iodin-iodin"),
    bond!("H-Cl", 431.0, "Ikatan hidrogen-klorin"),
    bond!("H-Br", 366.0, "Ikatan hidrogen-bromin"),
    bond!("H-I", 298.0, "Ikatan hidrogen-iodin"),
    bond!("S-H", 339.0, "Ikatan sulfur-hidrogen"),
    bond!("S=O", 523.0, "Ikatan rangkap sulfur-oksigen"),
];

const fn specific(
    substance: &'static str,
    c: Real,
    state: PhysicalState,
    common: bool,
) -> SpecificHeatEntry {
    SpecificHeatEntry {
        substance,
        c,
        state,
        common,
    }
}

const SPECIFIC_HEATS: [SpecificHeatEntry; 15] = [
    specific("Air (H2O)", 4.18, PhysicalState::Liquid, true),
    specific("Es (H2O)", 2.09, PhysicalState::Solid, true),
    specific("Uap air (H2O)", 2.01, PhysicalState::Gas, false),
    specific("Aluminium (Al)", 0.897, PhysicalState::Solid, true),
    specific("Tembaga (Cu)", 0.385, PhysicalState::Solid, true),
    specific("Besi (Fe)", 0.449, PhysicalState::Solid, true),
    specific("Emas (Au)", 0.129, PhysicalState::Solid, false),
    specific("Perak (Ag)", 0.235, PhysicalState::Solid, false),
    specific("Timbal (Pb)", 0.128, PhysicalState::Solid, false),
    specific("Kaca", 0.84, PhysicalState::Solid, true),
    specific("Beton", 0.88, PhysicalState::Solid, false),
    specific("Kayu", 1.76, PhysicalState::Solid, false),
    specific("Etanol (C2H5OH)", 2.44, PhysicalState::Liquid, true),
    specific("Minyak zaitun", 2.0, PhysicalState::Liquid, false),
    specific("Udara", 1.01, PhysicalState::Gas, true),
];

const fn combustion(
    formula: &'static str,
    name: &'static str,
    hc: Real,
    application: &'static str,
) -> CombustionEntry {
    CombustionEntry {
        formula,
        name,
        hc,
        application,
    }
}

const COMBUSTION_ENTHALPIES: [CombustionEntry; 10] = [
    combustion("CH4", "Metana", -890.3, "Gas alam"),
    combustion("C2H6", "Etana", -1560.0, "LPG"),
    combustion("C3H8", "Propana", -2220.0, "LPG, pemanas"),
    combustion("C4H10", "Butana", -2878.0, "Korek gas"),
    combustion("C8H18", "Oktana", -5471.0, "Bensin"),
    combustion("C2H5OH", "Etanol", -1367.0, "Biofuel"),
    combustion("C6H12O6", "Glukosa", -2808.0, "Metabolisme"),
    combustion("H2", "Hidrogen", -286.0, "Fuel cell"),
    combustion("C(grafit)", "Karbon", -393.5, "Batu bara"),
    combustion("S(s)", "Sulfur", -297.0, "Industri"),
];

const fn latent(
    substance: &'static str,
    name: &'static str,
    h_fus: Real,
    h_vap: Real,
) -> LatentHeatEntry {
    LatentHeatEntry {
        substance,
        name,
        h_fus,
        h_vap,
    }
}

const LATENT_HEATS: [LatentHeatEntry; 3] = [
    latent("H2O", "Air", 6.01, 40.7),
    latent("C2H5OH", "Etanol", 4.9, 38.6),
    latent("NH3", "Amonia", 5.66, 23.3),
];

macro_rules! example {
    ($eq:expr, $dh:expr, $name:expr, $app:expr, $kind:ident $(,)?) => {
        ExampleReaction {
            equation: $eq,
            delta_h: $dh,
            name: $name,
            application: $app,
            kind: ReactionKind::$kind,
        }
    };
}

const EXAMPLE_REACTIONS: [ExampleReaction; 10] = [
    example!(
        "CH4(g) + 2O2(g) → CO2(g) + 2H2O(l)",
        -890.3,
        "Pembakaran metana",
        "Kompor gas, pemanas",
        Exothermic,
    ),
    example!(
        "2H2(g) + O2(g) → 2H2O(l)",
        -571.6,
        "Pembentukan air",
        "Fuel cell, roket",
        Exothermic,
    ),
    example!(
        "C3H8(g) + 5O2(g) → 3CO2(g) + 4H2O(l)",
        -2220.0,
        "Pembakaran propana",
        "LPG, pemanggang",
        Exothermic,
    ),
    example!(
        "Fe2O3(s) + 3CO(g) → 2Fe(s) + 3CO2(g)",
        -26.7,
        "Reduksi besi(III) oksida",
        "Produksi besi",
        Exothermic,
    ),
    example!(
        "CaO(s) + H2O(l) → Ca(OH)2(s)",
        -65.2,
        "Pemadaman kapur",
        "Hand warmer, konstruksi",
        Exothermic,
    ),
    example!(
        "N2(g) + O2(g) → 2NO(g)",
        180.6,
        "Pembentukan nitrogen monoksida",
        "Petir, mesin pembakaran",
        Endothermic,
    ),
    example!(
        "C(s) + H2O(g) → CO(g) + H2(g)",
        131.3,
        "Gasifikasi karbon",
        "Produksi gas sintesis",
        Endothermic,
    ),
    example!(
        "6CO2(g) + 6H2O(l) → C6H12O6(s) + 6O2(g)",
        2808.0,
        "Fotosintesis",
        "Tumbuhan",
        Endothermic,
    ),
    example!(
        "NH4NO3(s) → NH4+(aq) + NO3-(aq)",
        25.7,
        "Pelarutan amonium nitrat",
        "Kompres dingin instan",
        Endothermic,
    ),
    example!(
        "CaCO3(s) → CaO(s) + CO2(g)",
        178.3,
        "Dekomposisi kalsium karbonat",
        "Pembuatan kapur",
        Endothermic,
    ),
];

pub fn formation_enthalpies() -> &'static [FormationEntry] {
    &FORMATION_ENTHALPIES
}

pub fn bond_energies() -> &'static [BondEntry] {
    &BOND_ENERGIES
}

pub fn specific_heats() -> &'static [SpecificHeatEntry] {
    &SPECIFIC_HEATS
}

pub fn combustion_enthalpies() -> &'static [CombustionEntry] {
    &COMBUSTION_ENTHALPIES
}

pub fn latent_heats() -> &'static [LatentHeatEntry] {
    &LATENT_HEATS
}

pub fn example_reactions() -> &'static [ExampleReaction] {
    &EXAMPLE_REACTIONS
}
