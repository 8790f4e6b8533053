//! # Error Types
//!
//! Structured error types for hull_core. Every failure carries enough
//! context (which parameter, what was expected, what was passed) for a
//! caller to report or fix the problem programmatically.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::errors::{CalcError, CalcResult};
//!
//! fn check_beam(exponent: i32) -> CalcResult<()> {
//!     if exponent != 1 {
//!         return Err(CalcError::dimension_mismatch("beam", 1, exponent));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_beam(2).unwrap_err().error_code(), "DIMENSION_MISMATCH");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hull_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for coefficient calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An argument carries a different power of length than its parameter declares
    #[error("Dimension mismatch for '{field}': expected length^{expected}, found length^{found}")]
    DimensionMismatch {
        field: String,
        expected: i32,
        found: i32,
    },

    /// The reference geometry (denominator) evaluates to zero
    #[error("Degenerate geometry in {calculation}: {reason}")]
    DegenerateGeometry { calculation: String, reason: String },

    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create a DimensionMismatch error
    pub fn dimension_mismatch(field: impl Into<String>, expected: i32, found: i32) -> Self {
        CalcError::DimensionMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DegenerateGeometry {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::dimension_mismatch("beam", 1, 2);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("displacement").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::degenerate_geometry("block_coeff", "zero beam").error_code(),
            "DEGENERATE_GEOMETRY"
        );
        assert_eq!(CalcError::internal("arity").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_message() {
        let error = CalcError::dimension_mismatch("draft", 1, 3);
        assert_eq!(
            error.to_string(),
            "Dimension mismatch for 'draft': expected length^1, found length^3"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let error: CalcError = parse.unwrap_err().into();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
