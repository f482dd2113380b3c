//! Request and response types

use crate::calculator::{MacroResult, Weekday, WeeklyMacroResult};
use serde::{Deserialize, Serialize};

/// Raw calculator form submission
///
/// Every field is kept as submitted; parsing and unit conversion happen in
/// the backend so malformed numbers can fall back to zero there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculateForm {
    pub sex: String,
    pub age: String,
    pub unit_system: String,
    /// Metric height in cm
    pub height: String,
    /// Metric weight in kg
    pub weight: String,
    pub feet: String,
    pub inches: String,
    pub weight_lbs: String,
    pub activity: String,
    pub goal: String,
    pub diet_type: String,
    /// Checkbox; `"on"` requests the weekly breakdown
    pub advanced: String,
    #[serde(rename = "Monday-activity")]
    pub monday_activity: String,
    #[serde(rename = "Tuesday-activity")]
    pub tuesday_activity: String,
    #[serde(rename = "Wednesday-activity")]
    pub wednesday_activity: String,
    #[serde(rename = "Thursday-activity")]
    pub thursday_activity: String,
    #[serde(rename = "Friday-activity")]
    pub friday_activity: String,
    #[serde(rename = "Saturday-activity")]
    pub saturday_activity: String,
    #[serde(rename = "Sunday-activity")]
    pub sunday_activity: String,
}

impl CalculateForm {
    pub fn is_advanced(&self) -> bool {
        self.advanced == "on"
    }

    /// Submitted activity override for a day, empty if none
    pub fn day_activity(&self, day: Weekday) -> &str {
        match day {
            Weekday::Monday => &self.monday_activity,
            Weekday::Tuesday => &self.tuesday_activity,
            Weekday::Wednesday => &self.wednesday_activity,
            Weekday::Thursday => &self.thursday_activity,
            Weekday::Friday => &self.friday_activity,
            Weekday::Saturday => &self.saturday_activity,
            Weekday::Sunday => &self.sunday_activity,
        }
    }
}

/// Outcome of a form submission, daily or weekly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CalculationResponse {
    Daily(MacroResult),
    Weekly(WeeklyMacroResult),
}

/// Error detail rendered by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
