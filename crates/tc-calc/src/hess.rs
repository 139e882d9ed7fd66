//! Hess's law: a net ΔH is the sum of the ΔH of any set of steps that adds
//! up to the net reaction.
//!
//! The caller picks the steps and decides how each one is flipped or scaled;
//! nothing here searches for a path.

use serde::Serialize;
use tc_core::{Real, ensure_finite, within_exclusive};
use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// Default half-width of the match window used by [`verify`].
pub const DEFAULT_MATCH_TOLERANCE: Real = 0.5;

/// A reference reaction as it is being used in a combination.
///
/// Only the forward ΔH, the coefficient multiplier and the reversed flag are
/// stored. The effective ΔH is derived from them, so flipping or scaling a
/// step always moves ΔH and coefficient together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionStep {
    label: String,
    forward_delta_h: Real,
    coefficient: Real,
    reversed: bool,
}

impl ReactionStep {
    /// A step at 1× in its written direction.
    pub fn new(label: impl Into<String>, forward_delta_h: Real) -> CalcResult<Self> {
        Self::with_state(label, forward_delta_h, 1.0, false)
    }

    pub fn with_state(
        label: impl Into<String>,
        forward_delta_h: Real,
        coefficient: Real,
        reversed: bool,
    ) -> CalcResult<Self> {
        let forward_delta_h = ensure_finite(forward_delta_h, "step ΔH")?;
        let coefficient = check_factor(coefficient)?;
        Ok(Self {
            label: label.into(),
            forward_delta_h,
            coefficient,
            reversed,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn forward_delta_h(&self) -> Real {
        self.forward_delta_h
    }

    pub fn coefficient(&self) -> Real {
        self.coefficient
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// ΔH with the current scale and direction applied.
    pub fn effective_delta_h(&self) -> Real {
        let sign = if self.reversed { -1.0 } else { 1.0 };
        sign * self.forward_delta_h * self.coefficient
    }

    /// Reverse the reaction: ΔH changes sign.
    pub fn flip(&mut self) {
        self.reversed = !self.reversed;
    }

    /// Multiply the whole reaction by `factor` (> 0).
    ///
    /// Direction changes go through [`flip`](Self::flip) so that the reversed
    /// flag stays truthful.
    pub fn scale(&mut self, factor: Real) -> CalcResult<()> {
        let factor = check_factor(factor)?;
        self.coefficient *= factor;
        Ok(())
    }

    /// Back to 1× in the written direction.
    pub fn reset(&mut self) {
        self.coefficient = 1.0;
        self.reversed = false;
    }

    /// Copy with `factor` applied first, then the flip if requested.
    pub fn transformed(&self, factor: Real, flip: bool) -> CalcResult<Self> {
        let mut step = self.clone();
        step.scale(factor)?;
        if flip {
            step.flip();
        }
        Ok(step)
    }
}

fn check_factor(factor: Real) -> CalcResult<Real> {
    let factor = ensure_finite(factor, "scale factor")?;
    if factor <= 0.0 {
        return Err(CalcError::invalid(
            "scale factor must be positive; use flip to reverse a step",
        ));
    }
    Ok(factor)
}

/// Sum of the effective ΔH of every step.
pub fn combine(steps: &[ReactionStep]) -> CalcResult<Real> {
    if steps.is_empty() {
        return Err(CalcError::InvalidEquationSet {
            what: "no reaction steps supplied",
        });
    }
    let total: Real = steps.iter().map(ReactionStep::effective_delta_h).sum();
    debug!(steps = steps.len(), total, "combined Hess steps");
    Ok(total)
}

/// `|total - target| < tolerance`. A difference of exactly `tolerance` does
/// not match.
pub fn verify(total: Real, target: Real, tolerance: Real) -> bool {
    within_exclusive(total, target, tolerance)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HessOutcome {
    pub total: Real,
    pub target: Real,
    pub matched: bool,
}

/// [`combine`] then [`verify`] with [`DEFAULT_MATCH_TOLERANCE`].
pub fn check(steps: &[ReactionStep], target: Real) -> CalcResult<HessOutcome> {
    let total = combine(steps)?;
    Ok(HessOutcome {
        total,
        target,
        matched: verify(total, target, DEFAULT_MATCH_TOLERANCE),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn flip_and_scale_commute(dh in -5000.0_f64..5000.0, k in 0.01_f64..10.0) {
            let base = ReactionStep::new("r", dh).unwrap();

            let mut a = base.clone();
            a.scale(k).unwrap();
            a.flip();

            let mut b = base;
            b.flip();
            b.scale(k).unwrap();

            prop_assert_eq!(a.effective_delta_h(), b.effective_delta_h());
            prop_assert_eq!(a.is_reversed(), b.is_reversed());
        }
    }
}
