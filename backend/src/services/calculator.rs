//! Calculator service
//!
//! Turns a raw form submission into engine input, applies the optional
//! strict validation, and runs the daily or weekly calculation.

use macro_calc_shared::{
    calculate_daily_macros, calculate_weekly_macros, feet_inches_to_cm, pounds_to_kg,
    validation, ActivityLevel, BiologicalSex, CalculateForm, CalculationResponse, DailyInput,
    DietType, Goal, UnitSystem, ValidationError, Weekday, WeeklyInput,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Engine input built from a form
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationRequest {
    Daily(DailyInput),
    Weekly(WeeklyInput),
}

impl CalculationRequest {
    pub fn mode(&self) -> &'static str {
        match self {
            CalculationRequest::Daily(_) => "daily",
            CalculationRequest::Weekly(_) => "weekly",
        }
    }
}

/// Calculator business logic
pub struct CalculatorService;

impl CalculatorService {
    /// Build engine input from a submitted form
    ///
    /// Unparseable numbers become zero and unknown enum values take their
    /// documented defaults; nothing here rejects input.
    pub fn parse_form(form: &CalculateForm) -> CalculationRequest {
        let (height_cm, weight_kg) = match UnitSystem::parse_lenient(&form.unit_system) {
            UnitSystem::Imperial => (
                feet_inches_to_cm(parse_number(&form.feet), parse_number(&form.inches)),
                pounds_to_kg(parse_number(&form.weight_lbs)),
            ),
            UnitSystem::Metric => (parse_number(&form.height), parse_number(&form.weight)),
        };

        let daily = DailyInput {
            sex: BiologicalSex::parse_lenient(&form.sex),
            age: form.age.trim().parse().unwrap_or(0),
            height_cm,
            weight_kg,
            activity_level: ActivityLevel::parse_lenient(&form.activity),
            goal: Goal::parse_lenient(&form.goal),
            diet_type: DietType::parse_lenient(&form.diet_type),
        };

        if !form.is_advanced() {
            return CalculationRequest::Daily(daily);
        }

        // Empty overrides fall back to the base level inside the engine
        let day_activities: BTreeMap<Weekday, ActivityLevel> = Weekday::ALL
            .into_iter()
            .filter_map(|day| {
                let value = form.day_activity(day);
                (!value.is_empty()).then(|| (day, ActivityLevel::parse_lenient(value)))
            })
            .collect();

        CalculationRequest::Weekly(WeeklyInput {
            base: daily,
            day_activities,
        })
    }

    /// Reject out-of-range metrics; used only when strict validation is on
    pub fn validate(request: &CalculationRequest) -> Result<(), ValidationError> {
        match request {
            CalculationRequest::Daily(input) => validation::validate_daily_input(input),
            CalculationRequest::Weekly(input) => validation::validate_weekly_input(input),
        }
    }

    /// Run the engine for a request
    pub fn calculate(request: &CalculationRequest) -> CalculationResponse {
        match request {
            CalculationRequest::Daily(input) => {
                let result = calculate_daily_macros(input);
                debug!(
                    calories = result.calories,
                    protein = result.protein_grams,
                    carbs = result.carbs_grams,
                    fat = result.fat_grams,
                    "Calculated daily macros"
                );
                CalculationResponse::Daily(result)
            }
            CalculationRequest::Weekly(input) => {
                let result = calculate_weekly_macros(input);
                debug!(
                    overrides = input.day_activities.len(),
                    average_calories = result.average.calories,
                    "Calculated weekly macros"
                );
                CalculationResponse::Weekly(result)
            }
        }
    }
}

/// Parse a numeric form field, treating anything malformed as zero
fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}
