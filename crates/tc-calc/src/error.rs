//! Calculation-layer errors.

use tc_core::TcError;
use thiserror::Error;

/// Result type for calculation operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised by the pure calculation functions.
///
/// All of these are deterministic: repeating the call with the same input
/// reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Non-finite or out-of-domain numeric argument.
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// Unit pair not recognised.
    #[error("Unsupported conversion: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },

    /// A compound token did not match `[coefficient]formula`.
    #[error("Malformed compound: '{token}'")]
    MalformedCompound { token: String },

    /// An equation failed shape validation.
    #[error("Malformed equation: {reason}")]
    MalformedEquation { reason: String },

    /// A stoichiometric entry is missing its coefficient or reference value.
    #[error("Incomplete line item '{key}': missing {missing}")]
    IncompleteLineItem { key: String, missing: &'static str },

    /// A Hess combination with no steps.
    #[error("Invalid equation set: {what}")]
    InvalidEquationSet { what: &'static str },
}

impl CalcError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        CalcError::InvalidInput { what: what.into() }
    }
}

impl From<TcError> for CalcError {
    fn from(err: TcError) -> Self {
        match err {
            TcError::NonFinite { what, value } => CalcError::InvalidInput {
                what: format!("{what} must be finite (got {value})"),
            },
            TcError::InvalidInput { what } => CalcError::InvalidInput {
                what: what.to_string(),
            },
            TcError::UnsupportedConversion { from, to } => {
                CalcError::UnsupportedConversion { from, to }
            }
        }
    }
}
