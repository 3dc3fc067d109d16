//! # Error Types
//!
//! Structured error types for capacity_core. Every failure is reported through
//! [`CalcError`] so that callers (people or tooling) can tell apart the three
//! ways a capacity query can go wrong:
//!
//! | Kind          | Variant                | Raised at            |
//! |---------------|------------------------|----------------------|
//! | Configuration | `MaterialNotFound`     | element construction |
//! | Geometry      | `InvalidInput`         | element construction |
//! | Domain        | `OutOfRange`           | capacity call        |
//! | Programmer    | `MissingField`         | capacity call        |
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(thickness_mm: f64) -> CalcResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "thickness_mm".to_string(),
//!             value: thickness_mm.to_string(),
//!             reason: "Thickness must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for capacity_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for capacity calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An element attribute is invalid (non-positive geometry, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A parameter the chosen method requires was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material, grade or condition combination not in the property tables
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// A parameter lies outside the range where the code formula applies
    #[error("Out of range for '{field}': {value} - {reason}")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
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

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for unknown material/grade/condition combinations
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CalcError::MaterialNotFound { .. })
    }

    /// True when a formula was asked to evaluate outside its applicability
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::OutOfRange { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Reject values that are not strictly positive and finite.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive, finite number",
        ));
    }
    Ok(())
}

/// Reject method parameters that are negative or not finite.
pub(crate) fn require_non_negative_param(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::out_of_range(
            field,
            value.to_string(),
            "Must be zero or a positive, finite number",
        ));
    }
    Ok(())
}

/// Reject method parameters that are not strictly positive and finite.
pub(crate) fn require_positive_param(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::out_of_range(
            field,
            value.to_string(),
            "Must be a positive, finite number",
        ));
    }
    Ok(())
}
