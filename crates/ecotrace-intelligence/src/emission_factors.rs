// ABOUTME: Regional emission factor table for the footprint calculator
// ABOUTME: Read-only calibration constants indexed exhaustively by Region
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Emission factors per region
//!
//! Values are simplified calibration constants, not certified emission
//! science. Units: kg CO2e per kWh (electricity, gas), per km (car), per
//! flight hour (flight); diet baselines and per-capita averages are annual
//! kg CO2e.

use ecotrace_core::models::{DietBaselines, EmissionFactors, Region};

/// World-average factors
pub const GLOBAL_FACTORS: EmissionFactors = EmissionFactors {
    electricity: 0.417,
    gas: 0.202,
    car: 0.17,
    flight: 150.0,
    transit: 0.05,
    diet: DietBaselines {
        meat_heavy: 3300.0,
        balanced: 2500.0,
        vegetarian: 1700.0,
        vegan: 1100.0,
    },
    avg_per_capita: 4700.0,
};

/// India factors
pub const INDIA_FACTORS: EmissionFactors = EmissionFactors {
    // Coal-heavy grid
    electricity: 0.71,
    gas: 0.202,
    // Smaller average engine size
    car: 0.14,
    flight: 150.0,
    transit: 0.03,
    diet: DietBaselines {
        meat_heavy: 2800.0,
        balanced: 1900.0,
        vegetarian: 1200.0,
        vegan: 900.0,
    },
    // National average is ~1.9 tonnes
    avg_per_capita: 1900.0,
};

/// Emission factor row for a region
#[must_use]
pub const fn factors_for(region: Region) -> &'static EmissionFactors {
    match region {
        Region::Global => &GLOBAL_FACTORS,
        Region::India => &INDIA_FACTORS,
    }
}

/// Per-hour coefficient for public transit travel
///
/// Independent of the table's `transit` field, which the transport formula
/// does not read.
#[must_use]
pub const fn transit_hour_factor(region: Region) -> f64 {
    match region {
        Region::India => 1.5,
        Region::Global => 2.5,
    }
}
