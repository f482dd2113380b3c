//! Macro Calculator WASM Module
//!
//! This crate provides WebAssembly bindings over the shared calculation
//! engine so the browser can preview results without a server round trip.
//! Results are returned as JSON strings.

use macro_calc_shared::{
    calculate_daily_macros, calculate_weekly_macros, ActivityLevel, BiologicalSex, DailyInput,
    DietType, Goal, Weekday, WeeklyInput,
};
use std::collections::{BTreeMap, HashMap};
use wasm_bindgen::prelude::*;

/// Convert pounds to kilograms
#[wasm_bindgen]
pub fn pounds_to_kg(pounds: f64) -> f64 {
    macro_calc_shared::pounds_to_kg(pounds)
}

/// Convert feet and inches to centimeters
#[wasm_bindgen]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    macro_calc_shared::feet_inches_to_cm(feet, inches)
}

/// Calculate BMR using the Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn calculate_bmr(sex: &str, age: i32, height_cm: f64, weight_kg: f64) -> f64 {
    macro_calc_shared::calculate_bmr(BiologicalSex::parse_lenient(sex), age, height_cm, weight_kg)
}

fn daily_input(
    sex: &str,
    age: i32,
    height_cm: f64,
    weight_kg: f64,
    activity: &str,
    goal: &str,
    diet_type: &str,
) -> DailyInput {
    DailyInput {
        sex: BiologicalSex::parse_lenient(sex),
        age,
        height_cm,
        weight_kg,
        activity_level: ActivityLevel::parse_lenient(activity),
        goal: Goal::parse_lenient(goal),
        diet_type: DietType::parse_lenient(diet_type),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Calculate daily macro targets, returned as a JSON object
#[wasm_bindgen]
pub fn calculate_daily_macros_json(
    sex: &str,
    age: i32,
    height_cm: f64,
    weight_kg: f64,
    activity: &str,
    goal: &str,
    diet_type: &str,
) -> Result<String, JsValue> {
    let input = daily_input(sex, age, height_cm, weight_kg, activity, goal, diet_type);
    to_json(&calculate_daily_macros(&input))
}

/// Calculate a weekly plan, returned as a JSON object
///
/// `day_activities_json` maps weekday names to activity levels, e.g.
/// `{"Monday": "very_active"}`. Unknown day names and empty values are
/// ignored.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn calculate_weekly_macros_json(
    sex: &str,
    age: i32,
    height_cm: f64,
    weight_kg: f64,
    activity: &str,
    goal: &str,
    diet_type: &str,
    day_activities_json: &str,
) -> Result<String, JsValue> {
    let overrides: HashMap<String, String> = serde_json::from_str(day_activities_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid day activities: {}", e)))?;

    let day_activities: BTreeMap<Weekday, ActivityLevel> = overrides
        .iter()
        .filter(|(_, level)| !level.is_empty())
        .filter_map(|(day, level)| {
            let day = day.parse::<Weekday>().ok()?;
            Some((day, ActivityLevel::parse_lenient(level)))
        })
        .collect();

    let input = WeeklyInput {
        base: daily_input(sex, age, height_cm, weight_kg, activity, goal, diet_type),
        day_activities,
    };
    to_json(&calculate_weekly_macros(&input))
}
