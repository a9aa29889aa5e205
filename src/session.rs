// ABOUTME: Caller-owned estimator session with memoized footprint results
// ABOUTME: Applies typed field updates, caches compute by input equality, runs explicit calculate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Estimator session
//!
//! The engine is stateless; this is where a caller keeps its state between
//! interactions. The footprint result is recomputed lazily and only when the
//! input record has changed since the last computation. Recommendations are
//! derived only on an explicit [`FootprintSession::calculate`] call.

use ecotrace_core::models::{CalculationResult, FieldUpdate, FootprintData, Recommendation};
use ecotrace_core::ValidationResult;
use ecotrace_intelligence::{EngineConfig, FootprintCalculator, RecommendationEngine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Which view the caller is presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Input form with the running total
    #[default]
    Calculator,
    /// Charts, comparison and recommendations
    Results,
}

/// Memoized calculation keyed by the input it was computed from
#[derive(Debug, Clone, Copy)]
struct CachedResult {
    input: FootprintData,
    result: CalculationResult,
}

/// Caller-owned estimator state
#[derive(Debug, Clone)]
pub struct FootprintSession {
    data: FootprintData,
    calculator: FootprintCalculator,
    engine: RecommendationEngine,
    cached: Option<CachedResult>,
    recommendations: Vec<Recommendation>,
    view: View,
    computations: u64,
}

impl Default for FootprintSession {
    fn default() -> Self {
        Self::new(FootprintData::default())
    }
}

impl FootprintSession {
    /// Start a session from an input record with the default engine configuration
    #[must_use]
    pub fn new(data: FootprintData) -> Self {
        Self::with_config(data, &EngineConfig::default())
    }

    /// Start a session with a custom engine configuration
    #[must_use]
    pub fn with_config(data: FootprintData, config: &EngineConfig) -> Self {
        Self {
            data,
            calculator: FootprintCalculator::with_config(*config),
            engine: RecommendationEngine::with_config(config),
            cached: None,
            recommendations: Vec::new(),
            view: View::Calculator,
            computations: 0,
        }
    }

    /// Current input record
    #[must_use]
    pub const fn data(&self) -> &FootprintData {
        &self.data
    }

    /// Apply one field update to the input record
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the update carries a negative or
    /// non-finite quantity; the record is unchanged in that case
    pub fn apply(&mut self, update: FieldUpdate) -> ValidationResult<()> {
        self.data.apply(update)?;
        debug!(field = update.field_name(), "Applied field update");
        Ok(())
    }

    /// Replace the whole input record
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the record fails validation
    pub fn replace(&mut self, data: FootprintData) -> ValidationResult<()> {
        data.validate()?;
        self.data = data;
        Ok(())
    }

    /// Footprint result for the current record, recomputed only if the record changed
    pub fn result(&mut self) -> CalculationResult {
        if let Some(cached) = self.cached {
            if cached.input == self.data {
                return cached.result;
            }
        }

        let result = self.calculator.compute(&self.data);
        self.computations += 1;
        self.cached = Some(CachedResult {
            input: self.data,
            result,
        });
        result
    }

    /// Number of times the calculator has actually run
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }

    /// Derive recommendations for the current record and switch to the results view
    pub fn calculate(&mut self) -> &[Recommendation] {
        let result = self.result();
        self.recommendations = self.engine.recommend(&self.data, &result);
        self.view = View::Results;
        info!(
            total = result.total,
            status = %result.comparison.status,
            recommendations = self.recommendations.len(),
            "Calculated footprint"
        );
        &self.recommendations
    }

    /// Recommendations from the last explicit calculation
    ///
    /// Not refreshed by later field updates.
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Current view
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Switch view without recalculating
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }
}
