//! tc-assess: grading engine for mixed-type thermochemistry assessments.
//!
//! Provides:
//! - Items with single-choice, true/false, numeric and label-select keys
//! - Question banks (built-in sample, YAML/JSON files, validation)
//! - The session state machine and its controller, with a countdown that
//!   submits automatically when it reaches zero
//! - Grading: per-item outcomes, overall score, per-topic tally and tier

pub mod bank;
pub mod config;
pub mod error;
pub mod grading;
pub mod item;
pub mod session;

pub use bank::{
    BankValidationError, QuestionBank, builtin_bank, load_json, load_yaml, save_json, save_yaml,
    validate_bank,
};
pub use config::{DEFAULT_TIME_BUDGET_S, SessionConfig, load_config_json, load_config_yaml};
pub use error::{AssessError, AssessResult};
pub use grading::{
    AnswerSheet, GradeReport, ItemOutcome, Tier, TopicTally, evaluate, score_percent,
};
pub use item::{Answer, AnswerKey, AssessmentItem, Difficulty, ItemKind, Topic};
pub use session::{
    LOW_TIME_WARNING_S, Mode, Phase, SessionController, SessionEvent, SessionState, SubmitReason,
    TransitionContext, format_clock, transition,
};
