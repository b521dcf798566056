use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Recoverable conversion failures surfaced to the user (or, for
/// `InvalidArgument`, to the developer of the calling layer).
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "message")]
#[ts(export)]
pub enum ConversionError {
    /// Input text is empty or not a finite number
    #[error("Please enter a valid number")]
    InvalidNumber,

    /// Negative value in a mode where the quantity cannot be negative
    #[error("Please enter a positive number")]
    NegativeNotAllowed,

    /// Conversion kind or mode outside the defined set, or a kind from the wrong mode
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConversionError {
    /// True for errors caused by what the user typed, as opposed to a caller defect.
    pub fn is_user_input(&self) -> bool {
        !matches!(self, ConversionError::InvalidArgument(_))
    }
}

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Conversion Error: {0}")]
    Conversion(ConversionError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Conversion(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
