//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A variable id not present in the editor's variable set
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Runtime error
    #[error("Runtime error: {0}")]
    Runtime(#[from] filtree_runtime::RuntimeError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] filtree_core::CoreError),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use filtree_core::{CoreError, ValueType};
    use filtree_runtime::RuntimeError;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("Invalid configuration".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_unknown_variable() {
        let error = SdkError::UnknownVariable("age".to_string());
        assert_eq!(error.to_string(), "Unknown variable: age");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }

    #[test]
    fn test_runtime_error_conversion() {
        let core = CoreError::InvalidLiteral {
            text: "x".to_string(),
            expected: ValueType::Bool,
        };
        let sdk_error: SdkError = RuntimeError::from(core).into();
        assert!(matches!(sdk_error, SdkError::Runtime(RuntimeError::Core(_))));
        assert!(sdk_error.to_string().contains("expected bool"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SdkError::ConfigError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }
}
