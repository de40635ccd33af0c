//! Unified error types for the command-line runner
//!
//! Library failures are wrapped as-is so their messages reach the user
//! unchanged; everything else is mapped to a string variant.

use difference_of_sums::DivisorError;
use email_normalizer::MalformedEmail;
use thiserror::Error;

/// Error type for commands and configuration
#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Email(#[from] MalformedEmail),

    #[error(transparent)]
    Divisor(#[from] DivisorError),

    #[error("{0}")]
    Other(String),
}

// Implement From for common error types

impl From<std::io::Error> for PracticeError {
    fn from(err: std::io::Error) -> Self {
        PracticeError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for PracticeError {
    fn from(err: toml::de::Error) -> Self {
        PracticeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PracticeError {
    fn from(err: serde_json::Error) -> Self {
        PracticeError::Parse(err.to_string())
    }
}

impl From<String> for PracticeError {
    fn from(err: String) -> Self {
        PracticeError::Other(err)
    }
}

impl From<&str> for PracticeError {
    fn from(err: &str) -> Self {
        PracticeError::Other(err.to_string())
    }
}

/// Result type alias using PracticeError
pub type Result<T> = std::result::Result<T, PracticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_pass_through() {
        let err: PracticeError = DivisorError::ZeroDivisor.into();
        assert_eq!(err.to_string(), "Divisor must be positive, got 0");

        let err: PracticeError = email_normalizer::normalize_email("nope").unwrap_err().into();
        assert!(matches!(err, PracticeError::Email(_)));
        assert!(err.to_string().contains("\"nope\""));
    }

    #[test]
    fn test_toml_errors_map_to_config() {
        let err: PracticeError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, PracticeError::Config(_)));
    }
}
