// ABOUTME: Annual footprint calculator converting household habits into CO2e
// ABOUTME: Weighted sums over regional emission factors with a regional comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Footprint calculator
//!
//! Pure, deterministic conversion of a [`FootprintData`] snapshot into an
//! annual [`CalculationResult`]. Inputs are assumed validated; the calculator
//! performs no checks of its own and never fails.

use ecotrace_core::constants::units::{MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use ecotrace_core::models::{
    Breakdown, CalculationResult, Comparison, ComparisonStatus, EmissionFactors, EnergyUsage,
    FootprintData, Region, TransportUsage, WasteHabits,
};
use tracing::debug;

use crate::config::{ComparisonThresholds, EngineConfig, WasteModel};
use crate::emission_factors::{factors_for, transit_hour_factor};

/// Footprint calculator with a fixed engine configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct FootprintCalculator {
    config: EngineConfig,
}

impl FootprintCalculator {
    /// Create a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the annual footprint of a household
    #[must_use]
    pub fn compute(&self, data: &FootprintData) -> CalculationResult {
        let factors = factors_for(data.region);

        let breakdown = Breakdown {
            energy: self.energy_emissions(&data.energy, factors),
            transport: transport_emissions(&data.transport, data.region, factors),
            diet: factors.diet.for_diet(data.diet),
            waste: waste_emissions(data.waste, &self.config.waste),
        };
        let total = breakdown.sum();
        let status = classify(total, factors.avg_per_capita, &self.config.comparison);

        debug!(
            region = %data.region,
            total,
            status = %status,
            "Computed footprint"
        );

        CalculationResult {
            total,
            breakdown,
            comparison: Comparison {
                average: factors.avg_per_capita,
                status,
            },
        }
    }

    /// Annual home energy emissions
    ///
    /// Renewable households keep a small residual grid factor rather than zero.
    fn energy_emissions(&self, energy: &EnergyUsage, factors: &EmissionFactors) -> f64 {
        let electricity_factor = if energy.renewable {
            self.config.renewable_electricity_factor
        } else {
            factors.electricity
        };
        energy.electricity * MONTHS_PER_YEAR * electricity_factor
            + energy.gas * MONTHS_PER_YEAR * factors.gas
    }
}

/// Annual travel emissions
fn transport_emissions(
    transport: &TransportUsage,
    region: Region,
    factors: &EmissionFactors,
) -> f64 {
    transport.car_km * WEEKS_PER_YEAR * factors.car
        + transport.flight_hours * factors.flight
        + transport.public_transit_hours * WEEKS_PER_YEAR * transit_hour_factor(region)
}

/// Annual waste emissions, floored at zero
fn waste_emissions(waste: WasteHabits, model: &WasteModel) -> f64 {
    let mut reduction = 0.0;
    if waste.recycles {
        reduction += model.recycling_credit;
    }
    if waste.composts {
        reduction += model.composting_credit;
    }
    (model.baseline - reduction).max(0.0)
}

/// Classify a total against the regional average
///
/// Strict less-than on both thresholds, low checked first.
#[must_use]
pub fn classify(total: f64, average: f64, thresholds: &ComparisonThresholds) -> ComparisonStatus {
    if total < average * thresholds.low_ratio {
        ComparisonStatus::Low
    } else if total < average * thresholds.high_ratio {
        ComparisonStatus::Average
    } else {
        ComparisonStatus::High
    }
}

/// Compute a footprint with the default configuration
#[must_use]
pub fn compute(data: &FootprintData) -> CalculationResult {
    FootprintCalculator::new().compute(data)
}
