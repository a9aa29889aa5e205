// ABOUTME: Rule-based recommendation engine for household footprint reduction
// ABOUTME: Ordered independent rules with region-keyed content, capped per invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Recommendation engine
//!
//! Rules are evaluated in a fixed order and are independent of one another:
//! several may fire, none may fire, and insertion order is evaluation order.
//! The regional fallback rule only fills remaining slots, so it never
//! displaces an earlier rule. The result is truncated to the configured
//! maximum (four by default).
//!
//! Rule text lives in [`RULE_CONTENT`], keyed by `(RuleId, Option<Region>)`.
//! A `None` region entry is the generic text used when no region-specific
//! entry exists.

use ecotrace_core::models::{
    CalculationResult, Category, FootprintData, Impact, Recommendation, Region,
};
use tracing::debug;

use crate::config::{EngineConfig, RecommendationLimits};

/// Identifier of a recommendation rule, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Household not on renewable supply
    Solar,
    /// Transport emissions above the trigger
    ElectricMobility,
    /// Diet includes meat
    PlantBased,
    /// Household does not compost
    Composting,
    /// Regional filler for remaining slots
    TraditionalPractices,
}

impl RuleId {
    /// All rules in evaluation order
    pub const ORDER: [Self; 5] = [
        Self::Solar,
        Self::ElectricMobility,
        Self::PlantBased,
        Self::Composting,
        Self::TraditionalPractices,
    ];

    /// Impact label attached to this rule's recommendation
    #[must_use]
    pub const fn impact(self) -> Impact {
        match self {
            Self::Solar | Self::ElectricMobility => Impact::High,
            Self::PlantBased | Self::TraditionalPractices => Impact::Medium,
            Self::Composting => Impact::Low,
        }
    }

    /// Category this rule targets
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Solar => Category::Energy,
            Self::ElectricMobility => Category::Transport,
            Self::PlantBased => Category::Diet,
            Self::Composting => Category::Waste,
            Self::TraditionalPractices => Category::Lifestyle,
        }
    }
}

/// Text of one rule for one region
#[derive(Debug, Clone, Copy)]
pub struct RuleContent {
    /// Rule the text belongs to
    pub rule: RuleId,
    /// Region the text is specific to, `None` for the generic text
    pub region: Option<Region>,
    /// Headline
    pub title: &'static str,
    /// Guidance text
    pub description: &'static str,
}

/// Content table for every rule
pub const RULE_CONTENT: &[RuleContent] = &[
    RuleContent {
        rule: RuleId::Solar,
        region: Some(Region::India),
        title: "Switch to PM-KUSUM Solar",
        description: "The PM-KUSUM scheme provides subsidies for solar pumps and grid-connected solar plants. It can reduce your home energy footprint to near zero.",
    },
    RuleContent {
        rule: RuleId::Solar,
        region: None,
        title: "Install Residential Solar",
        description: "Installing solar panels can reduce your grid dependence. Many regions offer tax credits or feed-in tariffs.",
    },
    RuleContent {
        rule: RuleId::ElectricMobility,
        region: Some(Region::India),
        title: "Adopt Local Electric Mobility",
        description: "Switch to Indian EV brands like Tata or Mahindra. They offer models optimized for local road conditions and urban commutes.",
    },
    RuleContent {
        rule: RuleId::ElectricMobility,
        region: None,
        title: "Transition to Electric Vehicle",
        description: "Switching from an internal combustion engine to an EV can reduce transport emissions by over 60% depending on your power source.",
    },
    RuleContent {
        rule: RuleId::PlantBased,
        region: None,
        title: "Plant-Based Transition",
        description: "Reducing red meat consumption even by 2 days a week significantly lowers methane output and water usage associated with your lifestyle.",
    },
    RuleContent {
        rule: RuleId::Composting,
        region: None,
        title: "Initiate Home Composting",
        description: "Diverting organic waste from landfills prevents methane generation. Composted soil is also a carbon sink for your home garden.",
    },
    RuleContent {
        rule: RuleId::TraditionalPractices,
        region: Some(Region::India),
        title: "Support Traditional Practices",
        description: "Adopt 'Zero Waste' traditional Indian habits like using copper vessels, cloth bags (Thaili), and supporting local seasonal produce markets.",
    },
];

/// Look up rule text, preferring region-specific content over the generic entry
#[must_use]
pub fn content_for(rule: RuleId, region: Region) -> Option<&'static RuleContent> {
    RULE_CONTENT
        .iter()
        .find(|c| c.rule == rule && c.region == Some(region))
        .or_else(|| {
            RULE_CONTENT
                .iter()
                .find(|c| c.rule == rule && c.region.is_none())
        })
}

/// Rule-based recommendation engine
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    limits: RecommendationLimits,
}

impl RecommendationEngine {
    /// Create an engine with the default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from an engine configuration
    #[must_use]
    pub const fn with_config(config: &EngineConfig) -> Self {
        Self {
            limits: config.recommendations,
        }
    }

    /// Derive recommendations for a household and its computed footprint
    #[must_use]
    pub fn recommend(
        &self,
        data: &FootprintData,
        result: &CalculationResult,
    ) -> Vec<Recommendation> {
        let mut recs = Vec::with_capacity(RuleId::ORDER.len());

        for rule in RuleId::ORDER {
            if !self.fires(rule, data, result, recs.len()) {
                continue;
            }
            // Rules without content for this region (and no generic text) stay silent
            if let Some(content) = content_for(rule, data.region) {
                recs.push(Recommendation {
                    title: content.title.to_owned(),
                    impact: rule.impact(),
                    description: content.description.to_owned(),
                    category: rule.category(),
                });
            }
        }

        recs.truncate(self.limits.max_recommendations);
        debug!(
            region = %data.region,
            count = recs.len(),
            "Generated recommendations"
        );
        recs
    }

    /// Whether a rule's trigger condition holds
    fn fires(
        &self,
        rule: RuleId,
        data: &FootprintData,
        result: &CalculationResult,
        produced: usize,
    ) -> bool {
        match rule {
            RuleId::Solar => !data.energy.renewable,
            RuleId::ElectricMobility => {
                result.breakdown.transport > self.limits.transport_trigger
            }
            RuleId::PlantBased => data.diet.includes_meat(),
            RuleId::Composting => !data.waste.composts,
            RuleId::TraditionalPractices => {
                data.region == Region::India && produced < self.limits.max_recommendations
            }
        }
    }
}

/// Derive recommendations with the default limits
#[must_use]
pub fn recommend(data: &FootprintData, result: &CalculationResult) -> Vec<Recommendation> {
    RecommendationEngine::new().recommend(data, result)
}
