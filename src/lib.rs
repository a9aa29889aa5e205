// ABOUTME: Main library entry point for the EcoTrace carbon footprint estimator
// ABOUTME: Re-exports the engine and provides session state, summaries, logging, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

#![deny(unsafe_code)]

//! # EcoTrace
//!
//! A household carbon-footprint estimator. Energy, transport, diet and waste
//! habits go in; an annual CO2e figure with a per-category breakdown, a
//! regional comparison, and up to four recommendations come out.
//!
//! ## Architecture
//!
//! - **`ecotrace-core`**: domain models and input validation
//! - **`ecotrace-intelligence`**: emission factors, calculator, recommendation rules
//! - **this crate**: caller-owned session state, presentation summaries,
//!   output formatting, logging, and the `ecotrace-cli` binary
//!
//! ## Example
//!
//! ```rust
//! use ecotrace::models::{FieldUpdate, FootprintData};
//! use ecotrace::session::FootprintSession;
//!
//! let mut session = FootprintSession::new(FootprintData::default());
//! session.apply(FieldUpdate::CarKm(300.0)).unwrap();
//! let total = session.result().total;
//! let recommendations = session.calculate();
//! assert!(total > 0.0);
//! assert!(recommendations.len() <= 4);
//! ```

/// Application constants (service names, environment variable names)
pub mod constants;

/// Unified error handling with stable error codes
pub mod errors;

/// Output format abstraction (text report, JSON)
pub mod formatters;

/// Input-record parsing and validation at the application boundary
pub mod input;

/// Structured logging configuration
pub mod logging;

/// Caller-owned session state with memoized results
pub mod session;

/// Presentation-ready summaries of a calculation
pub mod summary;

/// Domain models, re-exported from `ecotrace-core`
pub mod models {
    pub use ecotrace_core::models::*;
}

pub use ecotrace_core::{ValidationError, ValidationResult};
pub use ecotrace_intelligence::{
    compute, config, emission_factors, factors_for, recommend, ConfigError, EngineConfig,
    FootprintCalculator, RecommendationEngine,
};
