//! Macro calculation engine
//!
//! Computes daily calorie and macronutrient targets from body metrics using
//! the Mifflin-St Jeor BMR equation, an activity multiplier, a goal-based
//! calorie adjustment and a diet-type macro split.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No I/O, no logging, no shared state
//! 2. **Total**: Every input produces a result, including zero or negative metrics
//! 3. **Closed Enums**: Unknown form values resolve to a documented default

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Calories per gram of protein or carbohydrate
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
/// Calories per gram of fat
const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// Daily carbohydrate ceiling for keto, in grams
const KETO_CARB_CAP_GRAMS: f64 = 50.0;

// ============================================================================
// Input Enumerations
// ============================================================================

/// Biological sex for the BMR equation
///
/// Lenient parsing maps anything other than `"male"` to `Female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    #[default]
    Female,
}

impl BiologicalSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }

    /// Parse a form value, falling back to `Female`
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for BiologicalSex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            _ => Err(ParseError::unknown("sex", s)),
        }
    }
}

/// Activity level for TDEE calculation
///
/// Unrecognized or empty values resolve to `Sedentary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }

    /// Parse a form value, falling back to `Sedentary`
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseError::unknown("activity level", s))
    }
}

/// Body composition goal
///
/// Unrecognized values resolve to `Maintain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    /// Daily calorie adjustment applied on top of TDEE
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Maintain => 0.0,
            // ~0.5 kg per week
            Goal::Lose => -500.0,
            // lean surplus
            Goal::Gain => 300.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }

    /// Parse a form value, falling back to `Maintain`
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Goal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintain" => Ok(Goal::Maintain),
            "lose" => Ok(Goal::Lose),
            "gain" => Ok(Goal::Gain),
            _ => Err(ParseError::unknown("goal", s)),
        }
    }
}

/// Fixed share of calories per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Diet style used for the macro split
///
/// Unrecognized or empty values resolve to `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Weight-based protein, percentage fat, carbs fill the rest
    #[default]
    Standard,
    Keto,
    Paleo,
    Zone,
    LowFat,
}

impl DietType {
    pub const ALL: [DietType; 5] = [
        DietType::Standard,
        DietType::Keto,
        DietType::Paleo,
        DietType::Zone,
        DietType::LowFat,
    ];

    /// Fixed macro ratios, `None` for the weight-based standard split
    pub fn ratios(&self) -> Option<MacroRatios> {
        let (protein, carbs, fat) = match self {
            DietType::Standard => return None,
            DietType::Keto => (0.20, 0.05, 0.75),
            DietType::Paleo => (0.30, 0.20, 0.50),
            DietType::Zone => (0.30, 0.40, 0.30),
            DietType::LowFat => (0.30, 0.55, 0.15),
        };
        Some(MacroRatios { protein, carbs, fat })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Standard => "standard",
            DietType::Keto => "keto",
            DietType::Paleo => "paleo",
            DietType::Zone => "zone",
            DietType::LowFat => "low_fat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Standard => "Standard",
            DietType::Keto => "Keto",
            DietType::Paleo => "Paleo",
            DietType::Zone => "Zone",
            DietType::LowFat => "Low Fat",
        }
    }

    /// Parse a form value, falling back to `Standard`
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for DietType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietType::ALL
            .into_iter()
            .find(|diet| diet.as_str() == s)
            .ok_or_else(|| ParseError::unknown("diet type", s))
    }
}

/// Day of the week, ordered Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Canonical English name
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| ParseError::unknown("weekday", s))
    }
}

// ============================================================================
// Inputs and Results
// ============================================================================

/// Body metrics and preferences for a single-day calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyInput {
    pub sex: BiologicalSex,
    /// Age in years
    pub age: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: DietType,
}

/// Daily input plus per-weekday activity overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInput {
    pub base: DailyInput,
    /// Days missing from the map use `base.activity_level`
    #[serde(default)]
    pub day_activities: BTreeMap<Weekday, ActivityLevel>,
}

impl WeeklyInput {
    /// Effective activity level for a given day
    pub fn activity_for(&self, day: Weekday) -> ActivityLevel {
        self.day_activities
            .get(&day)
            .copied()
            .unwrap_or(self.base.activity_level)
    }
}

/// Rounded calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroResult {
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    pub bmr: f64,
    pub tdee: f64,
}

/// Per-day results for a week plus their average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMacroResult {
    pub days: BTreeMap<Weekday, MacroResult>,
    pub average: MacroResult,
}

// ============================================================================
// Calculations
// ============================================================================

/// Round to the nearest multiple of 5, halves away from zero
pub fn round_to_nearest_5(value: f64) -> f64 {
    (value / 5.0).round() * 5.0
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(sex: BiologicalSex, age: i32, height_cm: f64, weight_kg: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Split goal-adjusted calories into rounded macro targets
///
/// The returned `bmr` is zero; callers that know it fill it in.
pub fn calculate_macros(tdee: f64, goal: Goal, weight_kg: f64, diet_type: DietType) -> MacroResult {
    let calories = tdee + goal.calorie_adjustment();

    let (protein, carbs, fat) = match diet_type.ratios() {
        Some(ratios) => {
            let protein = calories * ratios.protein / KCAL_PER_GRAM_PROTEIN_CARB;
            let carbs = calories * ratios.carbs / KCAL_PER_GRAM_PROTEIN_CARB;
            let fat = calories * ratios.fat / KCAL_PER_GRAM_FAT;

            // Capped carb calories move to fat, not back across all three macros
            if diet_type == DietType::Keto && carbs > KETO_CARB_CAP_GRAMS {
                let fat = (calories
                    - protein * KCAL_PER_GRAM_PROTEIN_CARB
                    - KETO_CARB_CAP_GRAMS * KCAL_PER_GRAM_PROTEIN_CARB)
                    / KCAL_PER_GRAM_FAT;
                (protein, KETO_CARB_CAP_GRAMS, fat)
            } else {
                (protein, carbs, fat)
            }
        }
        None => standard_split(calories, goal, weight_kg),
    };

    MacroResult {
        calories: calories.round(),
        protein_grams: round_to_nearest_5(protein),
        carbs_grams: round_to_nearest_5(carbs),
        fat_grams: round_to_nearest_5(fat),
        bmr: 0.0,
        tdee: tdee.round(),
    }
}

/// Weight-based protein, percentage fat, remaining calories as carbs
fn standard_split(calories: f64, goal: Goal, weight_kg: f64) -> (f64, f64, f64) {
    let protein_per_kg = if goal == Goal::Gain { 2.2 } else { 2.0 };
    let protein = weight_kg * protein_per_kg;

    let fat_share = if goal == Goal::Maintain { 0.30 } else { 0.25 };
    let fat = calories * fat_share / KCAL_PER_GRAM_FAT;

    // May go negative for very low calorie, high protein inputs
    let carbs = (calories - protein * KCAL_PER_GRAM_PROTEIN_CARB - fat * KCAL_PER_GRAM_FAT)
        / KCAL_PER_GRAM_PROTEIN_CARB;

    (protein, carbs, fat)
}

/// Full calculation for one day: BMR, TDEE, then macros
pub fn calculate_daily_macros(input: &DailyInput) -> MacroResult {
    let bmr = calculate_bmr(input.sex, input.age, input.height_cm, input.weight_kg);
    let tdee = calculate_tdee(bmr, input.activity_level);

    MacroResult {
        bmr: bmr.round(),
        ..calculate_macros(tdee, input.goal, input.weight_kg, input.diet_type)
    }
}

/// Calculate each weekday independently and average the rounded results
pub fn calculate_weekly_macros(input: &WeeklyInput) -> WeeklyMacroResult {
    let days: BTreeMap<Weekday, MacroResult> = Weekday::ALL
        .into_iter()
        .map(|day| {
            let daily = DailyInput {
                activity_level: input.activity_for(day),
                ..input.base.clone()
            };
            (day, calculate_daily_macros(&daily))
        })
        .collect();

    let count = days.len() as f64;
    let sum = days.values().fold(MacroResult::default(), |acc, day| MacroResult {
        calories: acc.calories + day.calories,
        protein_grams: acc.protein_grams + day.protein_grams,
        carbs_grams: acc.carbs_grams + day.carbs_grams,
        fat_grams: acc.fat_grams + day.fat_grams,
        bmr: acc.bmr + day.bmr,
        tdee: acc.tdee + day.tdee,
    });

    let average = MacroResult {
        calories: (sum.calories / count).round(),
        protein_grams: round_to_nearest_5(sum.protein_grams / count),
        carbs_grams: round_to_nearest_5(sum.carbs_grams / count),
        fat_grams: round_to_nearest_5(sum.fat_grams / count),
        bmr: (sum.bmr / count).round(),
        tdee: (sum.tdee / count).round(),
    };

    WeeklyMacroResult { days, average }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn sample_input(goal: Goal, diet_type: DietType) -> DailyInput {
        DailyInput {
            sex: BiologicalSex::Male,
            age: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::ModeratelyActive,
            goal,
            diet_type,
        }
    }

    fn any_activity() -> impl Strategy<Value = ActivityLevel> {
        prop::sample::select(ActivityLevel::ALL.to_vec())
    }

    fn any_goal() -> impl Strategy<Value = Goal> {
        prop::sample::select(vec![Goal::Maintain, Goal::Lose, Goal::Gain])
    }

    fn any_sex() -> impl Strategy<Value = BiologicalSex> {
        prop::sample::select(vec![BiologicalSex::Male, BiologicalSex::Female])
    }

    // =========================================================================
    // Parsing Tests
    // =========================================================================

    #[test]
    fn test_lenient_parsing_defaults() {
        assert_eq!(BiologicalSex::parse_lenient("male"), BiologicalSex::Male);
        assert_eq!(BiologicalSex::parse_lenient("MALE"), BiologicalSex::Female);
        assert_eq!(BiologicalSex::parse_lenient(""), BiologicalSex::Female);
        assert_eq!(ActivityLevel::parse_lenient("very_active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::parse_lenient("couch"), ActivityLevel::Sedentary);
        assert_eq!(Goal::parse_lenient("gain"), Goal::Gain);
        assert_eq!(Goal::parse_lenient("bulk"), Goal::Maintain);
        assert_eq!(DietType::parse_lenient("low_fat"), DietType::LowFat);
        assert_eq!(DietType::parse_lenient(""), DietType::Standard);
    }

    #[test]
    fn test_strict_parsing_rejects_unknown() {
        assert!("couch".parse::<ActivityLevel>().is_err());
        assert!("bulk".parse::<Goal>().is_err());
        assert!("carnivore".parse::<DietType>().is_err());
        assert!("Funday".parse::<Weekday>().is_err());
        assert_eq!("Sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_order() {
        let names: Vec<_> = Weekday::ALL.iter().map(Weekday::name).collect();
        assert_eq!(
            names,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert!(Weekday::Monday < Weekday::Sunday);
    }

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[rstest]
    #[case(BiologicalSex::Male, 30, 180.0, 80.0, 1780.0)]
    #[case(BiologicalSex::Female, 25, 165.0, 60.0, 1345.25)]
    fn test_bmr_mifflin(
        #[case] sex: BiologicalSex,
        #[case] age: i32,
        #[case] height_cm: f64,
        #[case] weight_kg: f64,
        #[case] expected: f64,
    ) {
        let bmr = calculate_bmr(sex, age, height_cm, weight_kg);
        assert!((bmr - expected).abs() < 0.01, "got {}", bmr);
    }

    #[test]
    fn test_bmr_accepts_degenerate_input() {
        // Age 0 and zero metrics still produce a number
        let bmr = calculate_bmr(BiologicalSex::Female, 0, 0.0, 0.0);
        assert_eq!(bmr, -161.0);
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1800.0)]
    #[case(ActivityLevel::LightlyActive, 2062.5)]
    #[case(ActivityLevel::ModeratelyActive, 2325.0)]
    #[case(ActivityLevel::VeryActive, 2587.5)]
    #[case(ActivityLevel::ExtraActive, 2850.0)]
    fn test_tdee(#[case] level: ActivityLevel, #[case] expected: f64) {
        assert!((calculate_tdee(1500.0, level) - expected).abs() < 0.01);
    }

    // =========================================================================
    // Rounding Tests
    // =========================================================================

    #[rstest]
    #[case(211.0, 210.0)]
    #[case(213.0, 215.0)]
    #[case(215.0, 215.0)]
    #[case(217.5, 220.0)]
    #[case(212.4, 210.0)]
    #[case(212.5, 215.0)]
    fn test_round_to_nearest_5(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round_to_nearest_5(value), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: result is a multiple of 5 within 2.5 of the input
        #[test]
        fn prop_round_to_nearest_5(value in -10_000.0f64..10_000.0) {
            let rounded = round_to_nearest_5(value);
            prop_assert_eq!(rounded % 5.0, 0.0);
            prop_assert!((rounded - value).abs() <= 2.5 + 1e-9);
        }
    }

    // =========================================================================
    // Macro Split Tests
    // =========================================================================

    #[test]
    fn test_standard_maintain_split() {
        let result = calculate_daily_macros(&sample_input(Goal::Maintain, DietType::Standard));

        // BMR 1780, TDEE 2759
        assert_eq!(result.bmr, 1780.0);
        assert_eq!(result.tdee, 2759.0);
        assert_eq!(result.calories, 2759.0);
        // 80 kg × 2.0
        assert_eq!(result.protein_grams, 160.0);
        // 2759 × 0.30 / 9 = 91.97
        assert_eq!(result.fat_grams, 90.0);
        // (2759 - 640 - 827.7) / 4 = 322.8
        assert_eq!(result.carbs_grams, 325.0);
    }

    #[test]
    fn test_goal_adjustments() {
        let maintain = calculate_daily_macros(&sample_input(Goal::Maintain, DietType::Standard));
        let lose = calculate_daily_macros(&sample_input(Goal::Lose, DietType::Standard));
        let gain = calculate_daily_macros(&sample_input(Goal::Gain, DietType::Standard));

        assert_eq!(lose.calories, maintain.calories - 500.0);
        assert_eq!(gain.calories, maintain.calories + 300.0);
        // 80 kg × 2.2 = 176
        assert_eq!(gain.protein_grams, 175.0);
        assert_eq!(lose.tdee, maintain.tdee);
    }

    #[test]
    fn test_standard_carbs_can_go_negative() {
        let result = calculate_macros(500.0, Goal::Lose, 150.0, DietType::Standard);
        assert_eq!(result.calories, 0.0);
        assert!(result.carbs_grams < 0.0);
    }

    #[test]
    fn test_zone_split() {
        let result = calculate_macros(2000.0, Goal::Maintain, 70.0, DietType::Zone);
        assert_eq!(result.calories, 2000.0);
        assert_eq!(result.protein_grams, 150.0);
        assert_eq!(result.carbs_grams, 200.0);
        // 600 / 9 = 66.7
        assert_eq!(result.fat_grams, 65.0);
    }

    #[test]
    fn test_keto_cap_reallocates_to_fat() {
        // 4400 × 0.05 / 4 = 55 g carbs, above the cap
        let result = calculate_macros(4400.0, Goal::Maintain, 90.0, DietType::Keto);
        assert_eq!(result.carbs_grams, 50.0);
        assert_eq!(result.protein_grams, 220.0);
        // (4400 - 880 - 200) / 9 = 368.9
        assert_eq!(result.fat_grams, 370.0);
    }

    #[test]
    fn test_keto_below_cap_is_unchanged() {
        // 2000 × 0.05 / 4 = 25 g carbs
        let result = calculate_macros(2000.0, Goal::Maintain, 70.0, DietType::Keto);
        assert_eq!(result.carbs_grams, 25.0);
        assert_eq!(result.protein_grams, 100.0);
        // 1500 / 9 = 166.7
        assert_eq!(result.fat_grams, 165.0);
    }

    #[test]
    fn test_only_keto_is_capped() {
        let result = calculate_macros(4400.0, Goal::Maintain, 90.0, DietType::LowFat);
        assert_eq!(result.carbs_grams, 605.0);
    }

    #[test]
    fn test_calculate_macros_leaves_bmr_unset() {
        let result = calculate_macros(2000.0, Goal::Maintain, 70.0, DietType::Paleo);
        assert_eq!(result.bmr, 0.0);
    }

    #[test]
    fn test_daily_is_idempotent() {
        let input = sample_input(Goal::Lose, DietType::Paleo);
        assert_eq!(calculate_daily_macros(&input), calculate_daily_macros(&input));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: standard macros add back up to calories within rounding error
        #[test]
        fn prop_standard_macros_sum_to_calories(
            sex in any_sex(),
            age in 18i32..80,
            height in 140.0f64..210.0,
            weight in 40.0f64..150.0,
            activity in any_activity(),
            goal in any_goal(),
        ) {
            let input = DailyInput {
                sex, age, height_cm: height, weight_kg: weight,
                activity_level: activity, goal, diet_type: DietType::Standard,
            };
            let result = calculate_daily_macros(&input);
            let macro_calories = result.protein_grams * 4.0
                + result.carbs_grams * 4.0
                + result.fat_grams * 9.0;
            prop_assert!(
                (macro_calories - result.calories).abs() <= 50.0,
                "macros {} vs calories {}", macro_calories, result.calories
            );
        }

        /// Property: keto never exceeds 50 g carbs
        #[test]
        fn prop_keto_carbs_capped(
            tdee in 0.0f64..10_000.0,
            weight in 40.0f64..150.0,
            goal in any_goal(),
        ) {
            let result = calculate_macros(tdee, goal, weight, DietType::Keto);
            prop_assert!(result.carbs_grams <= 50.0);
        }

        /// Property: ratio diets hit their configured percentages
        #[test]
        fn prop_ratio_diets_match_percentages(
            tdee in 1500.0f64..4000.0,
            weight in 40.0f64..150.0,
            diet in prop::sample::select(vec![DietType::Paleo, DietType::Zone, DietType::LowFat]),
        ) {
            let ratios = diet.ratios().unwrap();
            let result = calculate_macros(tdee, Goal::Maintain, weight, diet);
            let carb_share = result.carbs_grams * 4.0 / result.calories;
            let fat_share = result.fat_grams * 9.0 / result.calories;
            prop_assert!((carb_share - ratios.carbs).abs() < 0.02);
            prop_assert!((fat_share - ratios.fat).abs() < 0.02);
        }

        /// Property: more activity never means fewer calories
        #[test]
        fn prop_activity_increases_calories(
            sex in any_sex(),
            age in 18i32..80,
            height in 140.0f64..210.0,
            weight in 40.0f64..150.0,
            goal in any_goal(),
        ) {
            let calories: Vec<f64> = ActivityLevel::ALL
                .iter()
                .map(|&activity_level| {
                    let input = DailyInput {
                        sex, age, height_cm: height, weight_kg: weight,
                        activity_level, goal, diet_type: DietType::Standard,
                    };
                    calculate_daily_macros(&input).calories
                })
                .collect();
            prop_assert!(calories.windows(2).all(|w| w[1] >= w[0]));
        }
    }

    // =========================================================================
    // Weekly Tests
    // =========================================================================

    fn weekly_input() -> WeeklyInput {
        WeeklyInput {
            base: DailyInput {
                sex: BiologicalSex::Female,
                age: 28,
                height_cm: 165.0,
                weight_kg: 65.0,
                activity_level: ActivityLevel::LightlyActive,
                goal: Goal::Lose,
                diet_type: DietType::Standard,
            },
            day_activities: BTreeMap::from([
                (Weekday::Monday, ActivityLevel::ModeratelyActive),
                (Weekday::Saturday, ActivityLevel::VeryActive),
                (Weekday::Sunday, ActivityLevel::Sedentary),
            ]),
        }
    }

    #[test]
    fn test_weekly_has_seven_days() {
        let result = calculate_weekly_macros(&weekly_input());
        assert_eq!(result.days.len(), 7);
        let order: Vec<_> = result.days.keys().copied().collect();
        assert_eq!(order, Weekday::ALL.to_vec());
    }

    #[test]
    fn test_weekly_overrides_and_fallback() {
        let input = weekly_input();
        let result = calculate_weekly_macros(&input);

        assert_eq!(result.days[&Weekday::Tuesday], calculate_daily_macros(&input.base));

        let saturday = DailyInput {
            activity_level: ActivityLevel::VeryActive,
            ..input.base.clone()
        };
        assert_eq!(result.days[&Weekday::Saturday], calculate_daily_macros(&saturday));

        assert!(result.days[&Weekday::Monday].calories > result.days[&Weekday::Sunday].calories);
        // BMR does not depend on activity
        let bmrs: Vec<f64> = result.days.values().map(|day| day.bmr).collect();
        assert!(bmrs.iter().all(|&bmr| bmr == bmrs[0]));
    }

    #[test]
    fn test_weekly_average() {
        let result = calculate_weekly_macros(&weekly_input());
        let calories: f64 = result.days.values().map(|day| day.calories).sum();
        let tdee: f64 = result.days.values().map(|day| day.tdee).sum();
        let protein: f64 = result.days.values().map(|day| day.protein_grams).sum();

        assert_eq!(result.average.calories, (calories / 7.0).round());
        assert_eq!(result.average.tdee, (tdee / 7.0).round());
        assert_eq!(result.average.protein_grams, round_to_nearest_5(protein / 7.0));
        assert_eq!(result.average.bmr, result.days[&Weekday::Monday].bmr);
        assert_eq!(result.average.fat_grams % 5.0, 0.0);
    }

    #[test]
    fn test_weekly_without_overrides_matches_daily() {
        let input = WeeklyInput {
            base: sample_input(Goal::Maintain, DietType::Zone),
            day_activities: BTreeMap::new(),
        };
        let daily = calculate_daily_macros(&input.base);
        let result = calculate_weekly_macros(&input);
        assert!(result.days.values().all(|day| *day == daily));
        assert_eq!(result.average, daily);
    }
}
