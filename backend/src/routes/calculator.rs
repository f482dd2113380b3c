//! Calculator page and form submission

use crate::error::{ApiError, ApiResult};
use crate::services::CalculatorService;
use crate::state::AppState;
use crate::templates;
use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use macro_calc_shared::{CalculateForm, CalculationResponse};
use tracing::{debug, warn};

/// GET / - Calculator page
pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

/// POST /calculate - Calculate macros and render a result fragment
pub async fn calculate(
    State(state): State<AppState>,
    form: Result<Form<CalculateForm>, FormRejection>,
) -> ApiResult<Html<String>> {
    let Form(form) = form.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = CalculatorService::parse_form(&form);
    debug!(
        mode = request.mode(),
        unit_system = %form.unit_system,
        diet_type = %form.diet_type,
        "Calculation requested"
    );

    if state.config().calculator.strict_validation {
        if let Err(err) = CalculatorService::validate(&request) {
            warn!(field = err.field(), "Rejected calculation input: {}", err);
            metrics::counter!("macro_validation_failures_total").increment(1);
            return Err(err.into());
        }
    }

    metrics::counter!("macro_calculations_total", "mode" => request.mode()).increment(1);

    let html = match CalculatorService::calculate(&request) {
        CalculationResponse::Daily(result) => templates::daily_fragment(&result),
        CalculationResponse::Weekly(result) => templates::weekly_fragment(&result),
    };

    Ok(Html(html))
}

