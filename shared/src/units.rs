//! Unit conversion helpers
//!
//! The engine works in SI units (kg, cm). Imperial form values are converted
//! on the way in, never inside the calculation.

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453592;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert pounds to kilograms
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Convert a feet + inches height to centimeters
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    let total_inches = feet * 12.0 + inches;
    total_inches * CM_PER_INCH
}

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system used by a submitted form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// kg and cm
    #[default]
    Metric,
    /// lbs and feet/inches
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse a form value; anything but `imperial` is metric
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(ParseError::unknown("unit system", s)),
        }
    }
}
