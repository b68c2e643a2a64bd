//! Error handling module for the calct CLI.
//!
//! The lexer itself never fails; everything here comes from the edges of
//! the tool: configuration, reading input, and writing output.

use thiserror::Error;

/// Main error type for the calct CLI application.
#[derive(Error, Debug)]
pub enum CalctError {
    /// Error when configuration cannot be found, parsed, or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the expression input cannot be obtained.
    #[error("Input error: {0}")]
    Input(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CalctError.
pub type Result<T> = std::result::Result<T, CalctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CalctError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_input_error_display() {
        let err = CalctError::Input("not valid UTF-8".to_string());
        assert_eq!(err.to_string(), "Input error: not valid UTF-8");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CalctError = io_err.into();
        assert!(matches!(err, CalctError::Io(_)));
        assert_eq!(err.to_string(), "IO error: file not found");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CalctError = json_err.into();
        assert!(matches!(err, CalctError::Json(_)));
    }
}
