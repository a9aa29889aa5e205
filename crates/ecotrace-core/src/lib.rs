// ABOUTME: Core types and constants for the EcoTrace carbon footprint estimator
// ABOUTME: Foundation crate with domain models, validation errors, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

#![deny(unsafe_code)]

//! # EcoTrace Core
//!
//! Foundation crate providing the shared domain types of the EcoTrace
//! estimator. It holds no calculation logic, so the engine and the caller
//! layers can depend on it without pulling each other in.
//!
//! ## Modules
//!
//! - **models**: Input record, typed field updates, emission factors, results and recommendations
//! - **errors**: Validation errors raised at the input-record boundary
//! - **constants**: Unit conversion constants shared by the engine and presentation layers

/// Validation errors for input records and field updates
pub mod errors;

/// Unit conversion constants organized by domain
pub mod constants;

/// Core data models (`FootprintData`, `EmissionFactors`, `CalculationResult`, etc.)
pub mod models;

pub use errors::{ValidationError, ValidationResult};
