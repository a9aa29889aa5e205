// ABOUTME: Core data models for the EcoTrace estimator
// ABOUTME: Re-exports input, emission factor, and result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Domain models shared by the engine and its callers

/// Regional emission factor rows
pub mod emission;
/// Caller-owned input record and typed field updates
pub mod footprint;
/// Derived calculation results and recommendations
pub mod result;

pub use emission::{DietBaselines, EmissionFactors};
pub use footprint::{
    DietPattern, EnergyUsage, FieldUpdate, FootprintData, Region, TransportUsage, WasteHabits,
};
pub use result::{
    Breakdown, CalculationResult, Category, Comparison, ComparisonStatus, Impact, Recommendation,
};
