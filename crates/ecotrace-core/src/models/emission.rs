// ABOUTME: Emission factor row describing one region's conversion coefficients
// ABOUTME: EmissionFactors and the per-diet annual baselines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

use serde::{Deserialize, Serialize};

use super::footprint::DietPattern;

/// Annual baseline emission per diet pattern (kg CO2e/year)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DietBaselines {
    /// Meat-heavy diet baseline
    pub meat_heavy: f64,
    /// Balanced diet baseline
    pub balanced: f64,
    /// Vegetarian diet baseline
    pub vegetarian: f64,
    /// Vegan diet baseline
    pub vegan: f64,
}

impl DietBaselines {
    /// Baseline for the given diet
    #[must_use]
    pub const fn for_diet(&self, diet: DietPattern) -> f64 {
        match diet {
            DietPattern::MeatHeavy => self.meat_heavy,
            DietPattern::Balanced => self.balanced,
            DietPattern::Vegetarian => self.vegetarian,
            DietPattern::Vegan => self.vegan,
        }
    }
}

/// Conversion coefficients for one region
///
/// Static calibration data: defined once, never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactors {
    /// Grid electricity (kg CO2e per kWh)
    pub electricity: f64,
    /// Natural gas (kg CO2e per kWh)
    pub gas: f64,
    /// Car travel (kg CO2e per km)
    pub car: f64,
    /// Air travel (kg CO2e per flight hour)
    pub flight: f64,
    /// Public transit (kg CO2e per unit); carried in the table but not read by the transport formula
    pub transit: f64,
    /// Annual diet baselines
    pub diet: DietBaselines,
    /// Regional average annual footprint per person (kg CO2e)
    pub avg_per_capita: f64,
}
