//! Assessment items, answer keys and submitted answers.

use std::fmt;

use serde::{Deserialize, Serialize};
use tc_core::{Real, within_inclusive};

/// Competency area an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    System,
    ReactionType,
    Equation,
    Calculation,
    Hess,
    Calorimetry,
    StandardEnthalpy,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::System,
        Topic::ReactionType,
        Topic::Equation,
        Topic::Calculation,
        Topic::Hess,
        Topic::Calorimetry,
        Topic::StandardEnthalpy,
    ];

    /// Display label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Topic::System => "Sistem & Lingkungan",
            Topic::ReactionType => "Eksoterm/Endoterm",
            Topic::Equation => "Persamaan Termokimia",
            Topic::Calculation => "Perhitungan ΔH",
            Topic::Hess => "Hukum Hess",
            Topic::Calorimetry => "Kalorimetri",
            Topic::StandardEnthalpy => "Jenis ΔH Standar",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    SingleChoice,
    TrueFalse,
    Numeric,
    LabelSelect,
}

/// What counts as a correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerKey {
    /// Zero-based index into the item's choices.
    SingleChoice { index: usize },
    TrueFalse { value: bool },
    /// Correct when `|answer - target| <= tolerance`.
    Numeric {
        target: Real,
        #[serde(default)]
        tolerance: Real,
    },
    /// Case-sensitive match against one of the item's labels.
    LabelSelect { label: String },
}

impl AnswerKey {
    pub fn kind(&self) -> ItemKind {
        match self {
            AnswerKey::SingleChoice { .. } => ItemKind::SingleChoice,
            AnswerKey::TrueFalse { .. } => ItemKind::TrueFalse,
            AnswerKey::Numeric { .. } => ItemKind::Numeric,
            AnswerKey::LabelSelect { .. } => ItemKind::LabelSelect,
        }
    }
}

/// A submitted answer.
///
/// Untagged so answer files can hold plain values: `true`, `3`, `667.5`,
/// `"D (Selisih Awal-Akhir)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Index(u64),
    Number(Real),
    Text(String),
}

impl Answer {
    /// Numeric reading of the answer, if it has one.
    ///
    /// Text is trimmed and parsed whole with a `.` decimal point. A comma
    /// decimal such as `"667,5"` or trailing units do not parse. A non-finite
    /// result counts as no number.
    pub fn as_number(&self) -> Option<Real> {
        let value = match self {
            Answer::Number(v) => *v,
            Answer::Index(i) => *i as Real,
            Answer::Text(s) => s.trim().parse::<Real>().ok()?,
            Answer::Bool(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub id: u32,
    pub topic: Topic,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub prompt: String,
    /// Options for single-choice items, labels for label-select items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    pub key: AnswerKey,
}

impl AssessmentItem {
    pub fn kind(&self) -> ItemKind {
        self.key.kind()
    }

    /// Grade one answer. A missing answer or one of the wrong shape is
    /// incorrect.
    pub fn is_correct(&self, answer: Option<&Answer>) -> bool {
        let Some(answer) = answer else {
            return false;
        };
        match (&self.key, answer) {
            (AnswerKey::SingleChoice { index }, Answer::Index(i)) => *i == *index as u64,
            (AnswerKey::SingleChoice { index }, Answer::Number(v)) => *v == *index as Real,
            (AnswerKey::TrueFalse { value }, Answer::Bool(b)) => b == value,
            (AnswerKey::LabelSelect { label }, Answer::Text(t)) => t == label,
            (AnswerKey::Numeric { target, tolerance }, answer) => answer
                .as_number()
                .is_some_and(|v| within_inclusive(v, *target, *tolerance)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(target: Real, tolerance: Real) -> AssessmentItem {
        AssessmentItem {
            id: 16,
            topic: Topic::Calorimetry,
            difficulty: Difficulty::Hard,
            prompt: "heat of combustion per mole".into(),
            choices: vec![],
            explanation: String::new(),
            key: AnswerKey::Numeric { target, tolerance },
        }
    }

    #[test]
    fn numeric_bound_is_inclusive() {
        let item = numeric(672.0, 5.0);
        assert!(item.is_correct(Some(&Answer::Number(667.0))));
        assert!(item.is_correct(Some(&Answer::Number(677.0))));
        assert!(!item.is_correct(Some(&Answer::Number(666.9))));
        assert!(item.is_correct(Some(&Answer::Index(672))));
        assert!(item.is_correct(Some(&Answer::Text(" 670.5 ".into()))));
    }

    #[test]
    fn unparsable_numeric_is_wrong_not_error() {
        let item = numeric(672.0, 5.0);
        assert!(!item.is_correct(None));
        assert!(!item.is_correct(Some(&Answer::Text("enam ratus".into()))));
        assert!(!item.is_correct(Some(&Answer::Text("NaN".into()))));
        assert!(!item.is_correct(Some(&Answer::Text("inf".into()))));
        assert!(!item.is_correct(Some(&Answer::Bool(true))));
    }

    #[test]
    fn comma_decimal_text_is_not_a_number() {
        let item = numeric(672.0, 5.0);
        assert_eq!(Answer::Text("667,5".into()).as_number(), None);
        assert!(!item.is_correct(Some(&Answer::Text("667,5".into()))));
        assert!(!item.is_correct(Some(&Answer::Text("667 kJ".into()))));
        assert!(item.is_correct(Some(&Answer::Text("667.5".into()))));
    }

    #[test]
    fn zero_tolerance_needs_exact_value() {
        let item = numeric(4.18, 0.0);
        assert!(item.is_correct(Some(&Answer::Number(4.18))));
        assert!(!item.is_correct(Some(&Answer::Number(4.19))));
    }

    #[test]
    fn label_match_is_case_sensitive() {
        let item = AssessmentItem {
            id: 21,
            topic: Topic::ReactionType,
            difficulty: Difficulty::Medium,
            prompt: "Which label marks ΔH?".into(),
            choices: vec!["A (Awal)".into(), "D (Selisih Awal-Akhir)".into()],
            explanation: String::new(),
            key: AnswerKey::LabelSelect {
                label: "D (Selisih Awal-Akhir)".into(),
            },
        };
        assert!(item.is_correct(Some(&Answer::Text("D (Selisih Awal-Akhir)".into()))));
        assert!(!item.is_correct(Some(&Answer::Text("d (selisih awal-akhir)".into()))));
        assert!(!item.is_correct(Some(&Answer::Index(1))));
    }

    #[test]
    fn choice_and_boolean_keys() {
        let mut item = numeric(0.0, 0.0);
        item.key = AnswerKey::SingleChoice { index: 3 };
        assert!(item.is_correct(Some(&Answer::Index(3))));
        assert!(!item.is_correct(Some(&Answer::Index(0))));
        assert!(!item.is_correct(Some(&Answer::Text("3".into()))));

        item.key = AnswerKey::TrueFalse { value: false };
        assert!(item.is_correct(Some(&Answer::Bool(false))));
        assert!(!item.is_correct(Some(&Answer::Bool(true))));
    }

    #[test]
    fn untagged_answers_from_yaml() {
        let parsed: Vec<Answer> = serde_yaml::from_str("[true, 3, 667.5, -2, \"label\"]").unwrap();
        assert_eq!(
            parsed,
            vec![
                Answer::Bool(true),
                Answer::Index(3),
                Answer::Number(667.5),
                Answer::Number(-2.0),
                Answer::Text("label".into()),
            ]
        );
    }

    #[test]
    fn key_uses_type_tag() {
        let key: AnswerKey = serde_json::from_str(r#"{"type":"numeric","target":672.0}"#).unwrap();
        assert_eq!(
            key,
            AnswerKey::Numeric {
                target: 672.0,
                tolerance: 0.0
            }
        );
    }
}
