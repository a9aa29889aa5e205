// ABOUTME: Household footprint input record with region and diet enumerations
// ABOUTME: FootprintData, its nested usage groups, and the typed FieldUpdate contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::fields;
use crate::errors::{ValidationError, ValidationResult};

/// Region selecting which emission factor row applies
///
/// Serializes as `Global` / `India`; deserialization also accepts the
/// lowercase and uppercase spellings that `FromStr` accepts on the command line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// World-average factors
    #[serde(alias = "global", alias = "GLOBAL")]
    Global,
    /// India-specific factors (coal-heavy grid, smaller cars)
    #[default]
    #[serde(alias = "india", alias = "INDIA")]
    India,
}

impl Region {
    /// Every supported region, in display order
    pub const ALL: [Self; 2] = [Self::Global, Self::India];

    /// Display name, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::India => "India",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "india" => Ok(Self::India),
            _ => Err(ValidationError::UnknownRegion(s.to_owned())),
        }
    }
}

/// Dietary pattern, each with an annualized baseline emission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietPattern {
    /// Meat at most meals
    MeatHeavy,
    /// Mixed diet
    Balanced,
    /// No meat or fish
    #[default]
    Vegetarian,
    /// No animal products
    Vegan,
}

impl DietPattern {
    /// Every diet pattern, from most to least emission-intensive
    pub const ALL: [Self; 4] = [Self::MeatHeavy, Self::Balanced, Self::Vegetarian, Self::Vegan];

    /// Serialized identifier (`meat-heavy`, `balanced`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MeatHeavy => "meat-heavy",
            Self::Balanced => "balanced",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MeatHeavy => "Meat Intensive",
            Self::Balanced => "Balanced",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
        }
    }

    /// Whether the diet includes meat
    #[must_use]
    pub const fn includes_meat(self) -> bool {
        matches!(self, Self::MeatHeavy | Self::Balanced)
    }
}

impl fmt::Display for DietPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietPattern {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "meat-heavy" => Ok(Self::MeatHeavy),
            "balanced" => Ok(Self::Balanced),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            _ => Err(ValidationError::UnknownDiet(s.to_owned())),
        }
    }
}

/// Home energy consumption
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyUsage {
    /// Electricity consumption (kWh/month)
    pub electricity: f64,
    /// Natural gas consumption (kWh/month)
    pub gas: f64,
    /// Household on a renewable (solar/wind) supply
    pub renewable: bool,
}

/// Travel habits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportUsage {
    /// Car distance (km/week)
    pub car_km: f64,
    /// Air travel (hours/year)
    pub flight_hours: f64,
    /// Public transit usage (hours/week)
    pub public_transit_hours: f64,
}

/// Waste handling habits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WasteHabits {
    /// Household recycles
    pub recycles: bool,
    /// Household composts organic waste
    pub composts: bool,
}

/// Complete user input snapshot
///
/// Owned by the caller and changed one field at a time through
/// [`FootprintData::apply`]. Numeric fields are finite and non-negative once
/// the record has passed [`FootprintData::validate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FootprintData {
    /// Region selecting the emission factor row
    pub region: Region,
    /// Home energy consumption
    pub energy: EnergyUsage,
    /// Travel habits
    pub transport: TransportUsage,
    /// Dietary pattern
    pub diet: DietPattern,
    /// Waste handling habits
    pub waste: WasteHabits,
}

impl Default for FootprintData {
    fn default() -> Self {
        Self {
            region: Region::India,
            energy: EnergyUsage {
                electricity: 150.0,
                gas: 50.0,
                renewable: false,
            },
            transport: TransportUsage {
                car_km: 50.0,
                flight_hours: 2.0,
                public_transit_hours: 10.0,
            },
            diet: DietPattern::Vegetarian,
            waste: WasteHabits {
                recycles: true,
                composts: true,
            },
        }
    }
}

impl FootprintData {
    /// Check every numeric field
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, in field declaration order
    pub fn validate(&self) -> ValidationResult<()> {
        ValidationError::check_quantity(fields::ELECTRICITY, self.energy.electricity)?;
        ValidationError::check_quantity(fields::GAS, self.energy.gas)?;
        ValidationError::check_quantity(fields::CAR_KM, self.transport.car_km)?;
        ValidationError::check_quantity(fields::FLIGHT_HOURS, self.transport.flight_hours)?;
        ValidationError::check_quantity(
            fields::PUBLIC_TRANSIT_HOURS,
            self.transport.public_transit_hours,
        )?;
        Ok(())
    }

    /// Apply a single field update
    ///
    /// The record is left untouched when the update is rejected.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if a numeric update is negative or not finite
    pub fn apply(&mut self, update: FieldUpdate) -> ValidationResult<()> {
        if let Some(value) = update.quantity() {
            if let Err(e) = ValidationError::check_quantity(update.field_name(), value) {
                debug!(field = update.field_name(), error = %e, "Rejected field update");
                return Err(e);
            }
        }

        match update {
            FieldUpdate::Region(region) => self.region = region,
            FieldUpdate::Electricity(v) => self.energy.electricity = v,
            FieldUpdate::Gas(v) => self.energy.gas = v,
            FieldUpdate::Renewable(flag) => self.energy.renewable = flag,
            FieldUpdate::CarKm(v) => self.transport.car_km = v,
            FieldUpdate::FlightHours(v) => self.transport.flight_hours = v,
            FieldUpdate::PublicTransitHours(v) => self.transport.public_transit_hours = v,
            FieldUpdate::Diet(diet) => self.diet = diet,
            FieldUpdate::Recycles(flag) => self.waste.recycles = flag,
            FieldUpdate::Composts(flag) => self.waste.composts = flag,
        }
        Ok(())
    }

    /// Builder-style variant of [`FootprintData::apply`]
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if a numeric update is negative or not finite
    pub fn with(mut self, update: FieldUpdate) -> ValidationResult<Self> {
        self.apply(update)?;
        Ok(self)
    }
}

/// One field change to a `FootprintData` record
///
/// Each variant names exactly one field and carries a value of that field's
/// type, so a partial update can never address a missing path or mix types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    /// Switch region
    Region(Region),
    /// Electricity consumption (kWh/month)
    Electricity(f64),
    /// Gas consumption (kWh/month)
    Gas(f64),
    /// Renewable supply flag
    Renewable(bool),
    /// Car distance (km/week)
    CarKm(f64),
    /// Flight hours (hours/year)
    FlightHours(f64),
    /// Public transit (hours/week)
    PublicTransitHours(f64),
    /// Diet pattern
    Diet(DietPattern),
    /// Recycling flag
    Recycles(bool),
    /// Composting flag
    Composts(bool),
}

impl FieldUpdate {
    /// Dotted path of the field this update targets
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Region(_) => fields::REGION,
            Self::Electricity(_) => fields::ELECTRICITY,
            Self::Gas(_) => fields::GAS,
            Self::Renewable(_) => fields::RENEWABLE,
            Self::CarKm(_) => fields::CAR_KM,
            Self::FlightHours(_) => fields::FLIGHT_HOURS,
            Self::PublicTransitHours(_) => fields::PUBLIC_TRANSIT_HOURS,
            Self::Diet(_) => fields::DIET,
            Self::Recycles(_) => fields::RECYCLES,
            Self::Composts(_) => fields::COMPOSTS,
        }
    }

    /// Numeric payload, for updates that carry a quantity
    #[must_use]
    pub const fn quantity(&self) -> Option<f64> {
        match *self {
            Self::Electricity(v)
            | Self::Gas(v)
            | Self::CarKm(v)
            | Self::FlightHours(v)
            | Self::PublicTransitHours(v) => Some(v),
            Self::Region(_)
            | Self::Renewable(_)
            | Self::Diet(_)
            | Self::Recycles(_)
            | Self::Composts(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse_is_case_insensitive() {
        assert_eq!("india".parse::<Region>(), Ok(Region::India));
        assert_eq!(" GLOBAL ".parse::<Region>(), Ok(Region::Global));
        assert!(matches!(
            "Mars".parse::<Region>(),
            Err(ValidationError::UnknownRegion(name)) if name == "Mars"
        ));
    }

    #[test]
    fn test_diet_parse_accepts_underscore_form() {
        assert_eq!("meat_heavy".parse::<DietPattern>(), Ok(DietPattern::MeatHeavy));
        assert_eq!("Vegan".parse::<DietPattern>(), Ok(DietPattern::Vegan));
        assert!("carnivore".parse::<DietPattern>().is_err());
    }

    #[test]
    fn test_rejected_update_leaves_record_untouched() {
        let mut data = FootprintData::default();
        let before = data;
        let err = data.apply(FieldUpdate::FlightHours(-3.0)).unwrap_err();
        assert_eq!(err.field(), Some("transport.flightHours"));
        assert_eq!(data, before);
    }

    #[test]
    fn test_apply_sets_each_field() {
        let data = FootprintData::default()
            .with(FieldUpdate::Region(Region::Global))
            .and_then(|d| d.with(FieldUpdate::Gas(10.0)))
            .and_then(|d| d.with(FieldUpdate::Composts(false)))
            .and_then(|d| d.with(FieldUpdate::Diet(DietPattern::Vegan)))
            .unwrap();
        assert_eq!(data.region, Region::Global);
        assert!((data.energy.gas - 10.0).abs() < f64::EPSILON);
        assert!(!data.waste.composts);
        assert_eq!(data.diet, DietPattern::Vegan);
    }
}
