//! Error types for the assessment engine.
//!
//! Grading itself never fails: blank or malformed answers are graded as
//! incorrect. Errors here cover session misuse and bank/config loading.

use crate::bank::BankValidationError;
use crate::session::Phase;

pub type AssessResult<T> = Result<T, AssessError>;

#[derive(thiserror::Error, Debug)]
pub enum AssessError {
    #[error("Cannot {action} while the session is {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("Session is submitted; answers and flags are frozen")]
    SessionFrozen,

    #[error("Unknown item ID: {0}")]
    UnknownItem(u32),

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Validation error: {0}")]
    Validation(#[from] BankValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
