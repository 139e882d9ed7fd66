use thiserror::Error;

pub type TcResult<T> = Result<T, TcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Unsupported conversion: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },
}
