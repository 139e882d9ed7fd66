//! Reaction equation shape checks and compound token parsing.
//!
//! Only the *shape* is checked: one arrow, two non-empty sides, and terms of
//! the form `[coefficient]formula[charge][(phase)]`. Element balance is not
//! verified.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tc_core::Real;

use crate::error::{CalcError, CalcResult};

static COMPOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<coef>\d+/\d+|\d*\.?\d+)?\s*",
        r"(?P<formula>(?:[A-Z][a-z]?\d*|\((?:[A-Z][a-z]?\d*)+\)\d*)+",
        r"(?:\d*[+-])?(?:\((?:s|l|g|aq)\))?)$",
    ))
    .expect("compound pattern is a valid literal")
});

/// Reaction arrow accepted between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arrow {
    Ascii,
    Unicode,
}

impl Arrow {
    pub const ALL: [Arrow; 2] = [Arrow::Ascii, Arrow::Unicode];

    pub fn token(self) -> &'static str {
        match self {
            Arrow::Ascii => "->",
            Arrow::Unicode => "→",
        }
    }
}

/// Why an equation failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationIssue {
    Empty,
    MissingArrow,
    MultipleArrows,
    EmptySide,
}

impl EquationIssue {
    pub fn describe(self) -> &'static str {
        match self {
            EquationIssue::Empty => "equation is empty",
            EquationIssue::MissingArrow => "equation needs an arrow (-> or →)",
            EquationIssue::MultipleArrows => "equation has more than one arrow",
            EquationIssue::EmptySide => "reactant or product side is empty",
        }
    }
}

/// Outcome of [`validate`]. On failure the side strings are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationCheck {
    pub valid: bool,
    pub issue: Option<EquationIssue>,
    pub reactants: String,
    pub products: String,
    pub arrow: Option<Arrow>,
}

impl EquationCheck {
    fn invalid(issue: EquationIssue) -> Self {
        Self {
            valid: false,
            issue: Some(issue),
            reactants: String::new(),
            products: String::new(),
            arrow: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCompound {
    pub coefficient: Real,
    pub formula: String,
}

/// Both sides of an equation, in the order written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEquation {
    pub reactants: Vec<ParsedCompound>,
    pub products: Vec<ParsedCompound>,
    pub arrow: Arrow,
}

pub fn validate(text: &str) -> EquationCheck {
    let text = text.trim();
    if text.is_empty() {
        return EquationCheck::invalid(EquationIssue::Empty);
    }

    let mut found: Vec<(usize, Arrow)> = Arrow::ALL
        .iter()
        .flat_map(|&arrow| text.match_indices(arrow.token()).map(move |(i, _)| (i, arrow)))
        .collect();

    let (idx, arrow) = match found.len() {
        0 => return EquationCheck::invalid(EquationIssue::MissingArrow),
        1 => found.remove(0),
        _ => return EquationCheck::invalid(EquationIssue::MultipleArrows),
    };

    let reactants = text[..idx].trim();
    let products = text[idx + arrow.token().len()..].trim();
    if reactants.is_empty() || products.is_empty() {
        return EquationCheck::invalid(EquationIssue::EmptySide);
    }

    EquationCheck {
        valid: true,
        issue: None,
        reactants: reactants.to_string(),
        products: products.to_string(),
        arrow: Some(arrow),
    }
}

/// Split `"2H2O"` into coefficient `2` and formula `"H2O"`.
///
/// A missing coefficient means 1. Zero coefficients are rejected.
pub fn parse_compound(token: &str) -> CalcResult<ParsedCompound> {
    let trimmed = token.trim();
    let malformed = || CalcError::MalformedCompound {
        token: token.to_string(),
    };

    let caps = COMPOUND_RE.captures(trimmed).ok_or_else(malformed)?;
    let coefficient = match caps.name("coef") {
        Some(m) => parse_coefficient(m.as_str()).ok_or_else(malformed)?,
        None => 1.0,
    };
    let formula = caps
        .name("formula")
        .map(|m| m.as_str().to_string())
        .ok_or_else(malformed)?;

    Ok(ParsedCompound {
        coefficient,
        formula,
    })
}

/// Validate and then parse every term on both sides.
pub fn parse_equation(text: &str) -> CalcResult<ParsedEquation> {
    let check = validate(text);
    let arrow = match (check.issue, check.arrow) {
        (None, Some(arrow)) => arrow,
        (issue, _) => {
            return Err(CalcError::MalformedEquation {
                reason: issue
                    .unwrap_or(EquationIssue::Empty)
                    .describe()
                    .to_string(),
            });
        }
    };

    let parse_side = |side: &str| -> CalcResult<Vec<ParsedCompound>> {
        split_terms(side).iter().map(|t| parse_compound(t)).collect()
    };

    Ok(ParsedEquation {
        reactants: parse_side(&check.reactants)?,
        products: parse_side(&check.products)?,
        arrow,
    })
}

fn parse_coefficient(raw: &str) -> Option<Real> {
    let value = match raw.split_once('/') {
        Some((num, den)) => {
            let num: Real = num.parse().ok()?;
            let den: Real = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => raw.parse().ok()?,
    };
    (value > 0.0).then_some(value)
}

/// Split one side into terms.
///
/// A `+` surrounded by spaces is always a separator; if the side has none, a
/// `+` followed by a digit or capital letter is. Any other `+` is an ionic
/// charge and stays in its term.
fn split_terms(side: &str) -> Vec<String> {
    let normalized = side.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.contains(" + ") {
        return normalized
            .split(" + ")
            .map(|t| t.trim().to_string())
            .collect();
    }

    let mut terms = Vec::new();
    let mut current = String::new();
    let mut chars = normalized.chars().peekable();
    while let Some(ch) = chars.next() {
        let separates = ch == '+'
            && chars
                .peek()
                .is_some_and(|next| next.is_ascii_digit() || next.is_ascii_uppercase());
        if separates {
            terms.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    terms.push(current.trim().to_string());
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methane_combustion_is_valid() {
        let check = validate("CH4 + 2O2 -> CO2 + 2H2O");
        assert!(check.valid);
        assert_eq!(check.reactants, "CH4 + 2O2");
        assert_eq!(check.products, "CO2 + 2H2O");
        assert_eq!(check.arrow, Some(Arrow::Ascii));
    }

    #[test]
    fn unicode_arrow_is_valid() {
        let check = validate("CaCO3(s) → CaO(s) + CO2(g)");
        assert!(check.valid);
        assert_eq!(check.arrow, Some(Arrow::Unicode));
    }

    #[test]
    fn invalid_shapes() {
        assert_eq!(
            validate("no arrow here").issue,
            Some(EquationIssue::MissingArrow)
        );
        assert_eq!(validate("   ").issue, Some(EquationIssue::Empty));
        assert_eq!(validate("A -> B -> C").issue, Some(EquationIssue::MultipleArrows));
        assert_eq!(validate("A → B -> C").issue, Some(EquationIssue::MultipleArrows));
        assert_eq!(validate(" -> CO2").issue, Some(EquationIssue::EmptySide));
        assert!(!validate("CH4 ->   ").valid);
    }

    #[test]
    fn compound_coefficients() {
        let c = parse_compound("2H2O").unwrap();
        assert_eq!(c.coefficient, 2.0);
        assert_eq!(c.formula, "H2O");

        let c = parse_compound("CO2").unwrap();
        assert_eq!(c.coefficient, 1.0);

        let c = parse_compound("0.5O2").unwrap();
        assert_eq!(c.coefficient, 0.5);
        assert_eq!(c.formula, "O2");

        let c = parse_compound("3/2H2(g)").unwrap();
        assert_eq!(c.coefficient, 1.5);
        assert_eq!(c.formula, "H2(g)");
    }

    #[test]
    fn compound_shapes() {
        assert_eq!(parse_compound("Ca(OH)2(s)").unwrap().formula, "Ca(OH)2(s)");
        assert_eq!(parse_compound("NH4+(aq)").unwrap().formula, "NH4+(aq)");
        assert_eq!(parse_compound("6 CO2(g)").unwrap().coefficient, 6.0);
    }

    #[test]
    fn malformed_compounds() {
        for bad in ["", "2", "h2o", "2H2O!", "0H2", "1/0O2", "H2O(x)"] {
            let err = parse_compound(bad).unwrap_err();
            assert!(
                matches!(err, CalcError::MalformedCompound { .. }),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_full_equation() {
        let eq = parse_equation("CH4(g) + 2O2(g) → CO2(g) + 2H2O(l)").unwrap();
        assert_eq!(eq.reactants.len(), 2);
        assert_eq!(eq.products.len(), 2);
        assert_eq!(eq.products[1].coefficient, 2.0);
        assert_eq!(eq.products[1].formula, "H2O(l)");
        assert_eq!(eq.arrow.token(), "→");
    }

    #[test]
    fn parse_unspaced_and_ionic_terms() {
        let eq = parse_equation("CH4+2O2->CO2+2H2O").unwrap();
        assert_eq!(eq.reactants[1].formula, "O2");

        let eq = parse_equation("NH4NO3(s) → NH4+(aq) + NO3-(aq)").unwrap();
        assert_eq!(eq.products[0].formula, "NH4+(aq)");
        assert_eq!(eq.products[1].formula, "NO3-(aq)");
    }

    #[test]
    fn parse_equation_errors() {
        assert!(matches!(
            parse_equation("no arrow here"),
            Err(CalcError::MalformedEquation { .. })
        ));
        assert!(matches!(
            parse_equation("CH4 + -> CO2"),
            Err(CalcError::MalformedCompound { .. })
        ));
    }
}
