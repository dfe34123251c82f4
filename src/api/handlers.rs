//! HTTP request handlers for the take-home pay API.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_take_home;

use super::request::CalculationRequest;
use super::response::{ApiError, CalculationResponse, JurisdictionEntry};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/jurisdictions", get(jurisdictions_handler))
        .with_state(state)
}

/// Handler for the POST /calculate endpoint.
///
/// Accepts a calculation request and returns the itemized take-home result.
/// The engine itself cannot fail for numeric input, so the only error paths
/// here are malformed payloads.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let calculation_id = Uuid::new_v4();
    info!(calculation_id = %calculation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        calculation_id = %calculation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        calculation_id = %calculation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let tables = state.config().tables();
    let input = request.into_input(tables);
    let result = calculate_take_home(&input, tables);

    info!(
        calculation_id = %calculation_id,
        gross_salary = result.gross_salary,
        take_home = result.take_home,
        is_bonus_month = result.is_bonus_month,
        "Calculation completed"
    );

    let response = CalculationResponse {
        calculation_id,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tables_version: tables.metadata.version.clone(),
        result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for the GET /jurisdictions endpoint.
///
/// Lists the prefectures from the loaded tables so UI pickers can offer
/// indices and codes without duplicating the table.
async fn jurisdictions_handler(State(state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<JurisdictionEntry> = state
        .config()
        .tables()
        .prefectures
        .iter()
        .enumerate()
        .map(|(index, prefecture)| JurisdictionEntry {
            index,
            code: prefecture.code.clone(),
            name: prefecture.name.clone(),
            health_rate: prefecture.health_rate,
        })
        .collect();

    (StatusCode::OK, Json(entries))
}
