//! Optional strict input validation
//!
//! The calculation engine accepts any numbers. These checks sit in front of
//! it for deployments that want to reject physiologically impossible input;
//! they never alter a value that passes.

use crate::calculator::{DailyInput, WeeklyInput};
use crate::errors::ValidationError;

/// Age range in years
pub const AGE_RANGE: (i32, i32) = (1, 150);
/// Height range in cm (covers infants to tallest recorded humans)
pub const HEIGHT_CM_RANGE: (f64, f64) = (50.0, 300.0);
/// Weight range in kg
pub const WEIGHT_KG_RANGE: (f64, f64) = (20.0, 500.0);

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    let (min, max) = AGE_RANGE;
    check_range("age", age as f64, (min as f64, max as f64))
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    check_range("height", height_cm, HEIGHT_CM_RANGE)
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    check_range("weight", weight_kg, WEIGHT_KG_RANGE)
}

/// Validate every numeric field of a daily input, first failure wins
pub fn validate_daily_input(input: &DailyInput) -> Result<(), ValidationError> {
    validate_age(input.age)?;
    validate_height_cm(input.height_cm)?;
    validate_weight_kg(input.weight_kg)?;
    Ok(())
}

/// Weekly overrides are closed enums, so only the base metrics need checking
pub fn validate_weekly_input(input: &WeeklyInput) -> Result<(), ValidationError> {
    validate_daily_input(&input.base)
}

/// Map field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        _ => field_name,
    }
}
