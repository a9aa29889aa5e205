// ABOUTME: Footprint calculation and recommendation engine for EcoTrace
// ABOUTME: Emission factor table, calculator, rule-based recommendations, engine config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

#![deny(unsafe_code)]

//! # EcoTrace Intelligence
//!
//! Pure functions over `ecotrace-core` models. Nothing here holds state or
//! performs I/O; callers own the input record and decide when to compute.

/// Engine configuration (thresholds, waste model, recommendation limits)
pub mod config;

/// Regional emission factor table
pub mod emission_factors;

/// Annual footprint calculator
pub mod footprint_calculator;

/// Rule-based recommendation engine
pub mod recommendation_engine;

pub use config::{ConfigError, EngineConfig};
pub use emission_factors::factors_for;
pub use footprint_calculator::{compute, FootprintCalculator};
pub use recommendation_engine::{recommend, RecommendationEngine, RuleId};
