// ABOUTME: Derived footprint results and recommendation records
// ABOUTME: CalculationResult with its breakdown and comparison, plus Recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Emission category used for breakdowns and recommendations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Home electricity and gas
    Energy,
    /// Car, flight and transit travel
    Transport,
    /// Food
    Diet,
    /// Household waste
    Waste,
    /// General lifestyle habits (recommendations only)
    Lifestyle,
}

impl Category {
    /// The four categories that make up a footprint breakdown
    pub const BREAKDOWN: [Self; 4] = [Self::Energy, Self::Transport, Self::Diet, Self::Waste];

    /// Display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Transport => "Transport",
            Self::Diet => "Diet",
            Self::Waste => "Waste",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-way split of the annual footprint (kg CO2e/year)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Breakdown {
    /// Home energy emissions
    pub energy: f64,
    /// Travel emissions
    pub transport: f64,
    /// Diet emissions
    pub diet: f64,
    /// Waste emissions
    pub waste: f64,
}

impl Breakdown {
    /// Sum of all four categories
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.energy + self.transport + self.diet + self.waste
    }

    /// Value for one breakdown category; `Lifestyle` has no share and yields 0
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Energy => self.energy,
            Category::Transport => self.transport,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
            Category::Lifestyle => 0.0,
        }
    }

    /// `(category, value)` pairs in Energy, Transport, Diet, Waste order
    pub fn entries(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::BREAKDOWN.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Classification of a total against the regional average
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    /// Well below the regional average
    Low,
    /// Near the regional average
    Average,
    /// Well above the regional average
    High,
}

impl ComparisonStatus {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Average => "average",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison against the regional per-capita reference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    /// Regional average annual footprint
    pub average: f64,
    /// Where the total falls relative to `average`
    pub status: ComparisonStatus,
}

/// Result of one footprint calculation
///
/// Derived from a `FootprintData` snapshot; recomputed, never patched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    /// Annual total (kg CO2e/year)
    pub total: f64,
    /// Per-category split summing to `total`
    pub breakdown: Breakdown,
    /// Regional comparison
    pub comparison: Comparison,
}

/// Coarse severity label of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Impact {
    /// Large reduction potential
    High,
    /// Moderate reduction potential
    Medium,
    /// Small reduction potential
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// A human-readable sustainability action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Short headline
    pub title: String,
    /// Severity label
    pub impact: Impact,
    /// One or two sentences of guidance
    pub description: String,
    /// Area of the footprint the action targets
    pub category: Category,
}
