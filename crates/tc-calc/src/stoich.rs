//! Mole bookkeeping used alongside calorimetry results.

use tc_core::{Real, ensure_finite};

use crate::error::{CalcError, CalcResult};

/// `n = m / Mr`
pub fn moles(mass_g: Real, molar_mass: Real) -> CalcResult<Real> {
    let mass_g = ensure_finite(mass_g, "mass")?;
    let molar_mass = ensure_finite(molar_mass, "molar mass")?;
    if molar_mass == 0.0 {
        return Err(CalcError::invalid("molar mass must be non-zero"));
    }
    Ok(mass_g / molar_mass)
}

/// `m = n · Mr`
pub fn mass_from_moles(mol: Real, molar_mass: Real) -> CalcResult<Real> {
    let mol = ensure_finite(mol, "amount")?;
    let molar_mass = ensure_finite(molar_mass, "molar mass")?;
    Ok(mol * molar_mass)
}

/// Heat per mole in kJ/mol from a heat in joules.
pub fn molar_enthalpy_kj(q_j: Real, mol: Real) -> CalcResult<Real> {
    let q_j = ensure_finite(q_j, "heat")?;
    let mol = ensure_finite(mol, "amount")?;
    if mol <= 0.0 {
        return Err(CalcError::invalid("amount must be positive"));
    }
    Ok(q_j / 1000.0 / mol)
}

/// Total heat in kJ for `amount_mol` moles of reaction.
pub fn reaction_heat_kj(delta_h_per_mol: Real, amount_mol: Real) -> CalcResult<Real> {
    let delta_h = ensure_finite(delta_h_per_mol, "ΔH")?;
    let amount = ensure_finite(amount_mol, "amount")?;
    Ok(delta_h * amount)
}
