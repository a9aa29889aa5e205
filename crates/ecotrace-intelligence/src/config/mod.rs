// ABOUTME: Engine configuration for footprint calculation and recommendations
// ABOUTME: Defaults reproduce the calibrated constants; env overrides are parsed and validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Engine Configuration
//!
//! Tunable parameters of the calculator and recommendation engine that are
//! not part of the regional emission factor table: comparison thresholds,
//! the waste model, the residual grid factor for renewable households, and
//! recommendation limits.
//!
//! Configuration is environment-only. [`EngineConfig::default`] reproduces the
//! calibrated behavior exactly; [`EngineConfig::load`] layers `ECOTRACE_*`
//! overrides on top and validates the result.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

use crate::recommendation_engine::RuleId;

/// Thresholds classifying a total against the regional average
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComparisonThresholds {
    /// Totals strictly below `average * low_ratio` are `low`
    pub low_ratio: f64,
    /// Totals strictly below `average * high_ratio` (and not low) are `average`
    pub high_ratio: f64,
    /// Personal target shown next to the regional average (kg CO2e/year)
    pub benchmark_target: f64,
}

impl Default for ComparisonThresholds {
    fn default() -> Self {
        Self {
            low_ratio: 0.7,
            high_ratio: 1.3,
            benchmark_target: 1500.0,
        }
    }
}

/// Annual waste emission model (kg CO2e/year)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WasteModel {
    /// Emission of a household that neither recycles nor composts
    pub baseline: f64,
    /// Deduction for recycling
    pub recycling_credit: f64,
    /// Deduction for composting
    pub composting_credit: f64,
}

impl Default for WasteModel {
    fn default() -> Self {
        Self {
            baseline: 800.0,
            recycling_credit: 400.0,
            composting_credit: 200.0,
        }
    }
}

/// Limits and triggers for recommendation generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecommendationLimits {
    /// Transport emissions strictly above this trigger the mobility rule
    pub transport_trigger: f64,
    /// Maximum number of recommendations returned per call
    pub max_recommendations: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            transport_trigger: 2000.0,
            max_recommendations: 4,
        }
    }
}

/// Engine configuration container
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Comparison classification thresholds
    pub comparison: ComparisonThresholds,
    /// Waste emission model
    pub waste: WasteModel,
    /// Recommendation triggers and limits
    pub recommendations: RecommendationLimits,
    /// Residual grid factor applied to electricity of renewable households (kg CO2e/kWh)
    pub renewable_electricity_factor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            comparison: ComparisonThresholds::default(),
            waste: WasteModel::default(),
            recommendations: RecommendationLimits::default(),
            renewable_electricity_factor: 0.05,
        }
    }
}

impl EngineConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Engine configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are inverted or a value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_non_negative = |v: f64| v.is_finite() && v >= 0.0;

        if !(self.comparison.low_ratio.is_finite() && self.comparison.low_ratio > 0.0) {
            return Err(ConfigError::ValueOutOfRange("low_ratio must be positive"));
        }
        if !self.comparison.high_ratio.is_finite() {
            return Err(ConfigError::ValueOutOfRange("high_ratio must be finite"));
        }
        if self.comparison.low_ratio >= self.comparison.high_ratio {
            return Err(ConfigError::InvalidRange("low_ratio must be < high_ratio"));
        }
        if !finite_non_negative(self.comparison.benchmark_target) {
            return Err(ConfigError::ValueOutOfRange(
                "benchmark_target must be non-negative",
            ));
        }

        if !finite_non_negative(self.waste.baseline)
            || !finite_non_negative(self.waste.recycling_credit)
            || !finite_non_negative(self.waste.composting_credit)
        {
            return Err(ConfigError::ValueOutOfRange(
                "waste baseline and credits must be non-negative",
            ));
        }

        if !finite_non_negative(self.recommendations.transport_trigger) {
            return Err(ConfigError::ValueOutOfRange(
                "transport_trigger must be non-negative",
            ));
        }
        if self.recommendations.max_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must be at least 1",
            ));
        }
        if self.recommendations.max_recommendations > RuleId::ORDER.len() {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must not exceed the number of rules",
            ));
        }

        if !finite_non_negative(self.renewable_electricity_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "renewable_electricity_factor must be non-negative",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("ECOTRACE_LOW_RATIO", &mut self.comparison.low_ratio)?;
        Self::apply_env_var("ECOTRACE_HIGH_RATIO", &mut self.comparison.high_ratio)?;
        Self::apply_env_var(
            "ECOTRACE_BENCHMARK_TARGET",
            &mut self.comparison.benchmark_target,
        )?;

        Self::apply_env_var("ECOTRACE_WASTE_BASELINE", &mut self.waste.baseline)?;
        Self::apply_env_var(
            "ECOTRACE_RECYCLING_CREDIT",
            &mut self.waste.recycling_credit,
        )?;
        Self::apply_env_var(
            "ECOTRACE_COMPOSTING_CREDIT",
            &mut self.waste.composting_credit,
        )?;

        Self::apply_env_var(
            "ECOTRACE_TRANSPORT_TRIGGER",
            &mut self.recommendations.transport_trigger,
        )?;
        Self::apply_env_var(
            "ECOTRACE_MAX_RECOMMENDATIONS",
            &mut self.recommendations.max_recommendations,
        )?;

        Self::apply_env_var(
            "ECOTRACE_RENEWABLE_FACTOR",
            &mut self.renewable_electricity_factor,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_inverted_ratios_rejected() {
        let mut config = EngineConfig::default();
        config.comparison.low_ratio = 1.5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange("low_ratio must be < high_ratio"))
        );
    }

    #[test]
    fn test_zero_max_recommendations_rejected() {
        let mut config = EngineConfig::default();
        config.recommendations.max_recommendations = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_negative_waste_credit_rejected() {
        let mut config = EngineConfig::default();
        config.waste.composting_credit = -1.0;
        assert!(config.validate().is_err());
    }
}
