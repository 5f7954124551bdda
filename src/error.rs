//! Custom error types for ledger-view
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger-view operations
#[derive(Error, Debug, Clone)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and commands
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A value outside one of the closed enum sets (account type, bill status, ...)
    #[error("Invalid {kind}: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// Statement file type that cannot be queued
    #[error("Unsupported statement format: '{0}' (expected csv, ofx, qfx or pdf)")]
    UnsupportedFormat(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for bills
    pub fn bill_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Bill",
            identifier: identifier.into(),
        }
    }

    /// Create an invalid enum value error
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger-view operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::account_not_found("Chase Checking");
        assert_eq!(err.to_string(), "Account not found: Chase Checking");
        assert!(err.is_not_found());

        let err = LedgerError::bill_not_found("Rent");
        assert_eq!(err.to_string(), "Bill not found: Rent");
    }

    #[test]
    fn test_invalid_enum_error() {
        let err = LedgerError::invalid_enum("account type", "brokerage");
        assert_eq!(err.to_string(), "Invalid account type: 'brokerage'");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
