//! Worked Hess's-law problems: a target reaction plus the reference reactions
//! available to build it.

use serde::Serialize;
use tc_calc::{CalcResult, HessOutcome, ReactionStep, check};
use tc_core::Real;

/// A reference reaction as listed in a problem, in its written direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceReaction {
    pub equation: &'static str,
    pub delta_h: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HessProblem {
    pub key: &'static str,
    pub title: &'static str,
    pub target_equation: &'static str,
    pub target_delta_h: Real,
    pub reactions: &'static [ReferenceReaction],
    pub hint: &'static str,
    pub explanation: &'static str,
}

impl HessProblem {
    /// Every reference reaction as an untouched step.
    pub fn steps(&self) -> CalcResult<Vec<ReactionStep>> {
        self.reactions
            .iter()
            .map(|r| ReactionStep::new(r.equation, r.delta_h))
            .collect()
    }

    /// Combine the caller's chosen steps and compare with the target.
    pub fn check(&self, steps: &[ReactionStep]) -> CalcResult<HessOutcome> {
        check(steps, self.target_delta_h)
    }
}

const PROBLEMS: [HessProblem; 3] = [
    HessProblem {
        key: "guided",
        title: "Pembentukan CO₂ melalui CO",
        target_equation: "C(s) + O₂(g) → CO₂(g)",
        target_delta_h: -393.5,
        reactions: &[
            ReferenceReaction {
                equation: "C(s) + ½O₂(g) → CO(g)",
                delta_h: -110.5,
            },
            ReferenceReaction {
                equation: "CO(g) + ½O₂(g) → CO₂(g)",
                delta_h: -283.0,
            },
        ],
        hint: "Jumlahkan kedua reaksi. Perhatikan CO akan tereliminasi.",
        explanation: "ΔH total = ΔH₁ + ΔH₂ = -110.5 + (-283.0) = -393.5 kJ/mol",
    },
    HessProblem {
        key: "practice",
        title: "Pembakaran Karbon",
        target_equation: "C(s) + O₂(g) → CO₂(g)",
        target_delta_h: -393.5,
        reactions: &[
            ReferenceReaction {
                equation: "C(s) + ½O₂(g) → CO(g)",
                delta_h: -110.5,
            },
            ReferenceReaction {
                equation: "CO₂(g) → CO(g) + ½O₂(g)",
                delta_h: 283.0,
            },
        ],
        hint: "Flip reaksi kedua agar CO₂ ada di sisi produk",
        explanation: "Flip reaksi 2: ΔH = -110.5 + (-283.0) = -393.5 kJ/mol",
    },
    HessProblem {
        key: "challenge",
        title: "Pembentukan NH₃ (Haber)",
        target_equation: "½N₂(g) + 3/2H₂(g) → NH₃(g)",
        target_delta_h: -46.1,
        reactions: &[
            ReferenceReaction {
                equation: "N₂(g) + 3H₂(g) → 2NH₃(g)",
                delta_h: -92.2,
            },
            ReferenceReaction {
                equation: "H₂(g) + ½O₂(g) → H₂O(l)",
                delta_h: -285.8,
            },
        ],
        hint: "Kalikan reaksi 1 dengan ½ untuk mendapatkan 1 mol NH₃",
        explanation: "Gunakan reaksi 1 saja, kalikan dengan ½: ΔH = -92.2 × ½ = -46.1 kJ/mol",
    },
];

pub fn hess_problems() -> &'static [HessProblem] {
    &PROBLEMS
}

pub fn find_hess_problem(key: &str) -> Option<&'static HessProblem> {
    hess_problems()
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guided_sums_directly() {
        let p = find_hess_problem("guided").unwrap();
        let outcome = p.check(&p.steps().unwrap()).unwrap();
        assert!(outcome.matched);
    }

    #[test]
    fn practice_needs_a_flip() {
        let p = find_hess_problem("practice").unwrap();
        let mut steps = p.steps().unwrap();
        assert!(!p.check(&steps).unwrap().matched);

        steps[1].flip();
        let outcome = p.check(&steps).unwrap();
        assert!(outcome.matched);
        assert!((outcome.total - (-393.5)).abs() < 1e-9);
    }

    #[test]
    fn challenge_uses_half_of_first_step_only() {
        let p = find_hess_problem("Challenge").unwrap();
        let mut steps = p.steps().unwrap();
        steps[0].scale(0.5).unwrap();

        assert!(!p.check(&steps).unwrap().matched);
        assert!(p.check(&steps[..1]).unwrap().matched);
    }

    #[test]
    fn unknown_key() {
        assert!(find_hess_problem("expert").is_none());
    }
}
