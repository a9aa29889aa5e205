// ABOUTME: Validation error types for footprint input records
// ABOUTME: Rejects negative, non-finite, and out-of-enum values at the construction boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! # Validation Errors
//!
//! The calculation engine is total over well-formed records, so every
//! rejection happens here, before a value ever reaches `compute`.

use thiserror::Error;

/// Errors raised while building or updating a `FootprintData` record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A quantity field was given a negative value
    #[error("{field} must be non-negative, got {value}")]
    NegativeValue {
        /// Dotted path of the rejected field (e.g. `transport.carKm`)
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A quantity field was given NaN or an infinity
    #[error("{field} must be a finite number")]
    NonFiniteValue {
        /// Dotted path of the rejected field
        field: &'static str,
    },

    /// Region name outside the supported set
    #[error("Unknown region: {0} (expected Global or India)")]
    UnknownRegion(String),

    /// Diet name outside the supported set
    #[error("Unknown diet: {0} (expected meat-heavy, balanced, vegetarian or vegan)")]
    UnknownDiet(String),
}

impl ValidationError {
    /// Check a quantity field, returning the value unchanged when it is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `NonFiniteValue` for NaN/infinite input and `NegativeValue` for values below zero
    pub fn check_quantity(field: &'static str, value: f64) -> ValidationResult<f64> {
        if !value.is_finite() {
            return Err(Self::NonFiniteValue { field });
        }
        if value < 0.0 {
            return Err(Self::NegativeValue { field, value });
        }
        Ok(value)
    }

    /// Name of the field this error refers to, if any
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NegativeValue { field, .. } | Self::NonFiniteValue { field } => Some(field),
            Self::UnknownRegion(_) => Some("region"),
            Self::UnknownDiet(_) => Some("diet"),
        }
    }
}

/// Result alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_check_quantity_accepts_zero_and_positive() {
        assert_eq!(ValidationError::check_quantity("energy.gas", 0.0), Ok(0.0));
        assert_eq!(ValidationError::check_quantity("energy.gas", 12.5), Ok(12.5));
    }

    #[test]
    fn test_check_quantity_rejects_negative() {
        let err = ValidationError::check_quantity("transport.carKm", -1.0).unwrap_err();
        assert_eq!(err.field(), Some("transport.carKm"));
        assert_eq!(err.to_string(), "transport.carKm must be non-negative, got -1");
    }

    #[test]
    fn test_check_quantity_rejects_nan_and_infinity() {
        assert!(matches!(
            ValidationError::check_quantity("energy.electricity", f64::NAN),
            Err(ValidationError::NonFiniteValue { .. })
        ));
        assert!(matches!(
            ValidationError::check_quantity("energy.electricity", f64::INFINITY),
            Err(ValidationError::NonFiniteValue { .. })
        ));
    }
}
