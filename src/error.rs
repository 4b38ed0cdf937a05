//! Error types for dependabot-config.
//!
//! Uses thiserror for derive macros. Decode/encode/validation failures come
//! from the document core; I/O and user errors come from the file store and
//! the CLI.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for dependabot-config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Raw text could not be mapped onto the configuration schema.
    #[error("failed to decode config: {0}")]
    Decode(String),

    /// The encoder failed while rendering a document.
    #[error("failed to encode config: {0}")]
    Encode(String),

    /// A value is outside its allowed enumeration.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Reading or writing the configuration file failed.
    #[error("{0}")]
    Io(String),

    /// The requested operation was refused.
    #[error("{0}")]
    UserError(String),
}

impl ConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Decode(_) => exit_codes::USER_ERROR,
            ConfigError::Encode(_) => exit_codes::USER_ERROR,
            ConfigError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            ConfigError::Io(_) => exit_codes::IO_FAILURE,
            ConfigError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for dependabot-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_has_correct_exit_code() {
        let err = ConfigError::Decode("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = ConfigError::Validation("schedule interval 'hourly'".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = ConfigError::Io("failed to read".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ConfigError::UserError("already exists".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ConfigError::Decode("unexpected end of stream".to_string());
        assert_eq!(
            err.to_string(),
            "failed to decode config: unexpected end of stream"
        );

        let err = ConfigError::Validation("unknown interval".to_string());
        assert_eq!(err.to_string(), "Validation failed: unknown interval");
    }
}
