//! Command-layer error handling
//!
//! Every command returns `CommandResult<T>`. Errors are serializable so a
//! front end receives `{ "type": ..., "message": ... }` instead of a bare string.

use serde::Serialize;
use thiserror::Error;

use crate::shared::error::{AppError, ConversionError};

/// Command execution errors
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CommandError {
    /// User input or argument rejected by the conversion engine
    #[error("{0}")]
    Conversion(ConversionError),

    /// Invalid request parameter outside the engine's contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Settings file or terminal I/O failure
    #[error("System I/O error: {0}")]
    SystemIO(String),
}

impl CommandError {
    pub fn as_conversion(&self) -> Option<&ConversionError> {
        match self {
            CommandError::Conversion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConversionError> for CommandError {
    fn from(err: ConversionError) -> Self {
        CommandError::Conversion(err)
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::SystemIO(err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::InvalidInput(format!("JSON error: {}", err))
    }
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Io(msg) => CommandError::SystemIO(msg),
            AppError::Config(msg) => CommandError::SystemIO(msg),
            AppError::Serialization(msg) => CommandError::InvalidInput(msg),
            AppError::Conversion(err) => CommandError::Conversion(err),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

// Error message constants
pub const ERR_INVALID_DECIMALS: &str = "Decimal places must be between 0 and 12";
