use axum::{extract::State, Json};
use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

use crate::{
    calculator,
    error::AppError,
    handlers::AppState,
    metrics,
    models::api::{CompareRequest, CompareResponse},
    providers, validation,
};

/// Handle POST /api/v1/compare
///
/// Validates the inputs, fetches consumption records from the provider,
/// runs the pure cost core and responds with the ranked results. Any
/// failure along the way aborts the whole request; no partial results.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    metrics::record_request("compare");

    let outcome = compare(&state, &request, request_id).await;

    if let Err(e) = &outcome {
        metrics::record_error("compare", e.type_name());
    }
    let response = outcome?;

    metrics::record_duration("compare", start.elapsed());
    tracing::info!(
        %request_id,
        horizon_years = request.horizon_years,
        results = response.results.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Completed compare request"
    );

    Ok(Json(response))
}

async fn compare(
    state: &AppState,
    request: &CompareRequest,
    request_id: Uuid,
) -> Result<CompareResponse, AppError> {
    validation::validate_compare(&request.profile, &request.prices, request.horizon_years)?;

    let config = state.config.load();
    if !config.gemini.enabled {
        return Err(AppError::ProviderDisabled(
            "Consumption data provider is disabled".to_string(),
        ));
    }

    tracing::info!(
        %request_id,
        route_mix = ?request.profile.route_mix,
        horizon_years = request.horizon_years,
        "Handling compare request"
    );

    let records =
        providers::consumption::fetch_fuel_economy(&state.http_client, &config.gemini).await?;

    let split = calculator::annual_distance_split(&request.profile);
    let results = calculator::compute_costs(
        &request.profile,
        &records,
        &request.prices,
        request.horizon_years,
    );

    Ok(CompareResponse {
        request_id,
        generated_at: Utc::now(),
        horizon_years: request.horizon_years,
        annual_city_km: split.city_km,
        annual_highway_km: split.highway_km,
        results,
    })
}
