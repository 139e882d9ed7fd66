//! Question banks: the built-in sample bank, file I/O and validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AssessResult;
use crate::item::{AnswerKey, AssessmentItem, Difficulty, Topic};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub title: String,
    pub items: Vec<AssessmentItem>,
}

impl QuestionBank {
    pub fn item(&self, id: u32) -> Option<&AssessmentItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BankValidationError {
    #[error("Question bank has no items")]
    Empty,

    #[error("Duplicate item ID: {id}")]
    DuplicateId { id: u32 },

    #[error("Invalid value: item {id} {field} ({reason})")]
    InvalidValue {
        id: u32,
        field: &'static str,
        reason: String,
    },
}

pub fn validate_bank(bank: &QuestionBank) -> Result<(), BankValidationError> {
    if bank.items.is_empty() {
        return Err(BankValidationError::Empty);
    }

    let mut ids = HashSet::new();
    for item in &bank.items {
        if !ids.insert(item.id) {
            return Err(BankValidationError::DuplicateId { id: item.id });
        }
        validate_item(item)?;
    }
    Ok(())
}

fn validate_item(item: &AssessmentItem) -> Result<(), BankValidationError> {
    let invalid = |field: &'static str, reason: String| BankValidationError::InvalidValue {
        id: item.id,
        field,
        reason,
    };

    match &item.key {
        AnswerKey::SingleChoice { index } => {
            if *index >= item.choices.len() {
                return Err(invalid(
                    "key.index",
                    format!("{index} is out of range for {} choices", item.choices.len()),
                ));
            }
        }
        AnswerKey::TrueFalse { .. } => {}
        AnswerKey::Numeric { target, tolerance } => {
            if !target.is_finite() {
                return Err(invalid("key.target", "must be finite".to_string()));
            }
            if !tolerance.is_finite() || *tolerance < 0.0 {
                return Err(invalid(
                    "key.tolerance",
                    "must be finite and non-negative".to_string(),
                ));
            }
        }
        AnswerKey::LabelSelect { label } => {
            if !item.choices.iter().any(|c| c == label) {
                return Err(invalid(
                    "key.label",
                    format!("'{label}' is not one of the item's labels"),
                ));
            }
        }
    }
    Ok(())
}

pub fn load_yaml(path: &Path) -> AssessResult<QuestionBank> {
    let content = std::fs::read_to_string(path)?;
    let bank: QuestionBank = serde_yaml::from_str(&content)?;
    validate_bank(&bank)?;
    tracing::info!(path = %path.display(), items = bank.items.len(), "loaded question bank");
    Ok(bank)
}

pub fn save_yaml(path: &Path, bank: &QuestionBank) -> AssessResult<()> {
    validate_bank(bank)?;
    let content = serde_yaml::to_string(bank)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> AssessResult<QuestionBank> {
    let content = std::fs::read_to_string(path)?;
    let bank: QuestionBank = serde_json::from_str(&content)?;
    validate_bank(&bank)?;
    tracing::info!(path = %path.display(), items = bank.items.len(), "loaded question bank");
    Ok(bank)
}

pub fn save_json(path: &Path, bank: &QuestionBank) -> AssessResult<()> {
    validate_bank(bank)?;
    let content = serde_json::to_string_pretty(bank)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Sample bank covering every item type.
pub fn builtin_bank() -> QuestionBank {
    QuestionBank {
        title: "Asesmen Termokimia".to_string(),
        items: vec![
            AssessmentItem {
                id: 1,
                topic: Topic::System,
                difficulty: Difficulty::Easy,
                prompt: "Dalam percobaan pelarutan urea dalam air di gelas beker, dinding gelas \
                         terasa dingin. Manakah pernyataan yang benar mengenai sistem dan \
                         lingkungan?"
                    .to_string(),
                choices: strings(&[
                    "Sistem: Urea+Air, Lingkungan: Gelas+Udara",
                    "Sistem: Gelas, Lingkungan: Urea+Air",
                    "Sistem: Udara, Lingkungan: Air",
                    "Sistem: Tangan pengamat, Lingkungan: Gelas",
                ]),
                explanation: "Sistem adalah pusat pengamatan (pelarutan urea dalam air); \
                              lingkungan adalah segala sesuatu di luar sistem."
                    .to_string(),
                key: AnswerKey::SingleChoice { index: 0 },
            },
            AssessmentItem {
                id: 2,
                topic: Topic::ReactionType,
                difficulty: Difficulty::Medium,
                prompt: "Kompres dingin instan bekerja berdasarkan pelarutan amonium nitrat. \
                         Mengapa suhu turun drastis?"
                    .to_string(),
                choices: strings(&[
                    "Reaksi melepaskan kalor ke lingkungan (Eksoterm)",
                    "Sistem menyerap kalor dari lingkungan (Endoterm)",
                    "Energi sistem menurun drastis",
                    "Tidak terjadi perpindahan energi",
                ]),
                explanation: "Reaksi endoterm: sistem menyerap kalor dari lingkungan sehingga \
                              suhu lingkungan turun."
                    .to_string(),
                key: AnswerKey::SingleChoice { index: 1 },
            },
            AssessmentItem {
                id: 3,
                topic: Topic::Hess,
                difficulty: Difficulty::Hard,
                prompt: "Diketahui:\n1) C + O₂ → CO₂  ΔH = -394 kJ\n\
                         2) 2CO + O₂ → 2CO₂  ΔH = -569 kJ\n\
                         Berapakah ΔH pembentukan CO?"
                    .to_string(),
                choices: strings(&["-109.5 kJ", "-221.0 kJ", "+110.5 kJ", "-110.5 kJ"]),
                // Keyed to the standard value; the listed data sums to -109.5.
                explanation: "Balik reaksi (2) dan bagi 2: CO₂ → CO + ½O₂ (ΔH = +284.5). \
                              Total: -394 + 284.5 = -109.5 kJ. Nilai standar ΔH°f CO adalah \
                              -110.5 kJ."
                    .to_string(),
                key: AnswerKey::SingleChoice { index: 3 },
            },
            AssessmentItem {
                id: 11,
                topic: Topic::StandardEnthalpy,
                difficulty: Difficulty::Easy,
                prompt: "Entalpi pembentukan standar (ΔH°f) dari unsur bebas seperti O₂(g) dan \
                         N₂(g) adalah nol."
                    .to_string(),
                choices: vec![],
                explanation: "Benar. Unsur bebas dalam bentuk stabilnya pada keadaan standar \
                              memiliki ΔH°f = 0."
                    .to_string(),
                key: AnswerKey::TrueFalse { value: true },
            },
            AssessmentItem {
                id: 12,
                topic: Topic::Calorimetry,
                difficulty: Difficulty::Medium,
                prompt: "Dalam kalorimeter bom (volume tetap), kalor reaksi (q) sama dengan \
                         perubahan entalpi (ΔH)."
                    .to_string(),
                choices: vec![],
                explanation: "Salah. Pada volume tetap q = ΔU; ΔH = q pada tekanan tetap."
                    .to_string(),
                key: AnswerKey::TrueFalse { value: false },
            },
            AssessmentItem {
                id: 16,
                topic: Topic::Calorimetry,
                difficulty: Difficulty::Hard,
                prompt: "Pembakaran 2 gram metana (Mr = 16) menaikkan suhu 1000 g air sebesar \
                         20 °C. Jika c air = 4.2 J/g°C, hitung kalor pembakaran per mol dalam \
                         kJ/mol (angka saja, tanpa tanda negatif)."
                    .to_string(),
                choices: vec![],
                explanation: "q = 1000 · 4.2 · 20 = 84 kJ. Mol CH4 = 2/16 = 0.125 mol. \
                              ΔH = 84/0.125 = 672 kJ/mol."
                    .to_string(),
                key: AnswerKey::Numeric {
                    target: 672.0,
                    tolerance: 5.0,
                },
            },
            AssessmentItem {
                id: 21,
                topic: Topic::ReactionType,
                difficulty: Difficulty::Medium,
                prompt: "Pada diagram tingkat energi reaksi eksoterm, label manakah yang \
                         menunjukkan ΔH?"
                    .to_string(),
                choices: strings(&[
                    "A (Awal)",
                    "B (Puncak)",
                    "C (Selisih Awal-Puncak)",
                    "D (Selisih Awal-Akhir)",
                ]),
                explanation: "ΔH adalah selisih energi antara produk (akhir) dan reaktan (awal)."
                    .to_string(),
                key: AnswerKey::LabelSelect {
                    label: "D (Selisih Awal-Akhir)".to_string(),
                },
            },
        ],
    }
}
