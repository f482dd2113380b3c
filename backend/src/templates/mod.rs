//! Server-rendered HTML
//!
//! The index page carries the calculator form; `/calculate` answers with a
//! fragment that the page swaps into its result panel.

use macro_calc_shared::{
    ActivityLevel, DietType, ErrorDetail, MacroResult, Weekday, WeeklyMacroResult,
};
use std::fmt::Write;

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 860px; margin: 0 auto; padding: 24px; color: #1f2933; }
h1 { border-bottom: 2px solid #1f2933; padding-bottom: 8px; }
fieldset { border: 1px solid #d9e2ec; margin: 12px 0; padding: 12px; }
label { display: inline-block; margin: 4px 12px 4px 0; }
.macro-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; }
.macro { background: #f0f4f8; padding: 12px; text-align: center; }
.macro .value { font-size: 1.6em; font-weight: bold; }
.meta { color: #627d98; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #d9e2ec; padding: 6px; text-align: right; }
th:first-child, td:first-child { text-align: left; }
tr.average { font-weight: bold; }
.error { background: #ffe3e3; color: #8a1c1c; padding: 12px; }
"#;

const JS: &str = r#"
const form = document.getElementById('calculator-form');
const units = form.querySelectorAll('input[name=unit_system]');
const advanced = form.querySelector('input[name=advanced]');
function syncVisibility() {
    const imperial = form.querySelector('input[name=unit_system]:checked').value === 'imperial';
    document.getElementById('metric-fields').hidden = imperial;
    document.getElementById('imperial-fields').hidden = !imperial;
    document.getElementById('weekly-fields').hidden = !advanced.checked;
}
units.forEach(u => u.addEventListener('change', syncVisibility));
advanced.addEventListener('change', syncVisibility);
syncVisibility();
form.addEventListener('submit', async (event) => {
    event.preventDefault();
    const response = await fetch('/calculate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
        body: new URLSearchParams(new FormData(form)),
    });
    document.getElementById('results').innerHTML = await response.text();
});
"#;

/// Escape text for safe inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn activity_options(include_default: bool) -> String {
    let mut html = String::new();
    if include_default {
        html.push_str(r#"<option value="">Same as default</option>"#);
    }
    for level in ActivityLevel::ALL {
        let _ = write!(
            html,
            r#"<option value="{}">{}</option>"#,
            level.as_str(),
            level.description()
        );
    }
    html
}

fn diet_options() -> String {
    DietType::ALL
        .iter()
        .map(|diet| format!(r#"<option value="{}">{}</option>"#, diet.as_str(), diet.label()))
        .collect()
}

fn weekly_fields() -> String {
    let options = activity_options(true);
    Weekday::ALL
        .iter()
        .map(|day| {
            format!(
                r#"<label>{day} <select name="{day}-activity">{options}</select></label>"#,
                day = day.name(),
                options = options,
            )
        })
        .collect()
}

/// Full calculator page
pub fn index_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Macro Calculator</title>
    <style>
{css}
    </style>
</head>
<body>
    <h1>Macro Calculator</h1>
    <form id="calculator-form">
        <fieldset>
            <legend>About you</legend>
            <label><input type="radio" name="sex" value="male" checked> Male</label>
            <label><input type="radio" name="sex" value="female"> Female</label>
            <label>Age <input type="number" name="age" min="1" required></label>
        </fieldset>
        <fieldset>
            <legend>Measurements</legend>
            <label><input type="radio" name="unit_system" value="metric" checked> Metric</label>
            <label><input type="radio" name="unit_system" value="imperial"> Imperial</label>
            <div id="metric-fields">
                <label>Height (cm) <input type="number" step="any" name="height"></label>
                <label>Weight (kg) <input type="number" step="any" name="weight"></label>
            </div>
            <div id="imperial-fields" hidden>
                <label>Height <input type="number" name="feet"> ft <input type="number" step="any" name="inches"> in</label>
                <label>Weight (lbs) <input type="number" step="any" name="weight_lbs"></label>
            </div>
        </fieldset>
        <fieldset>
            <legend>Plan</legend>
            <label>Activity <select name="activity">{activity}</select></label>
            <label>Goal
                <select name="goal">
                    <option value="maintain">Maintain weight</option>
                    <option value="lose">Lose weight</option>
                    <option value="gain">Gain weight</option>
                </select>
            </label>
            <label>Diet <select name="diet_type">{diets}</select></label>
        </fieldset>
        <fieldset>
            <legend><label><input type="checkbox" name="advanced"> Plan by day of week</label></legend>
            <div id="weekly-fields" hidden>{weekly}</div>
        </fieldset>
        <button type="submit">Calculate</button>
    </form>
    <section id="results"></section>
    <script>
{js}
    </script>
</body>
</html>"#,
        css = CSS,
        js = JS,
        activity = activity_options(false),
        diets = diet_options(),
        weekly = weekly_fields(),
    )
}

fn macro_tile(label: &str, grams: f64) -> String {
    format!(
        r#"<div class="macro"><div class="label">{label}</div><div class="value">{grams:.0} g</div></div>"#
    )
}

/// Result fragment for a single day
pub fn daily_fragment(result: &MacroResult) -> String {
    format!(
        r#"<div class="results daily">
    <h2>{calories:.0} kcal per day</h2>
    <div class="macro-grid">
        {protein}
        {carbs}
        {fat}
        <div class="macro"><div class="label">Calories</div><div class="value">{calories:.0}</div></div>
    </div>
    <p class="meta">BMR {bmr:.0} kcal &middot; TDEE {tdee:.0} kcal</p>
</div>"#,
        calories = result.calories,
        protein = macro_tile("Protein", result.protein_grams),
        carbs = macro_tile("Carbs", result.carbs_grams),
        fat = macro_tile("Fat", result.fat_grams),
        bmr = result.bmr,
        tdee = result.tdee,
    )
}

fn weekly_row(class: &str, name: &str, day: &MacroResult) -> String {
    format!(
        r#"<tr class="{class}"><td>{name}</td><td>{:.0}</td><td>{:.0}</td><td>{:.0}</td><td>{:.0}</td><td>{:.0}</td></tr>"#,
        day.calories, day.protein_grams, day.carbs_grams, day.fat_grams, day.tdee,
    )
}

/// Result fragment for a week, one row per day plus the average
pub fn weekly_fragment(result: &WeeklyMacroResult) -> String {
    let rows: String = result
        .days
        .iter()
        .map(|(day, macros)| weekly_row("day", day.name(), macros))
        .collect();

    format!(
        r#"<div class="results weekly">
    <h2>Weekly plan</h2>
    <table>
        <thead><tr><th>Day</th><th>Calories</th><th>Protein (g)</th><th>Carbs (g)</th><th>Fat (g)</th><th>TDEE</th></tr></thead>
        <tbody>
{rows}
{average}
        </tbody>
    </table>
    <p class="meta">BMR {bmr:.0} kcal</p>
</div>"#,
        rows = rows,
        average = weekly_row("average", "Average", &result.average),
        bmr = result.average.bmr,
    )
}

/// Error fragment shown in place of a result
pub fn error_fragment(detail: &ErrorDetail) -> String {
    format!(
        r#"<div class="error" data-code="{code}">{message}</div>"#,
        code = escape_html(&detail.code),
        message = escape_html(&detail.message),
    )
}
