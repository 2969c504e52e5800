use axum::{extract::State, Json};
use std::time::Instant;

use crate::{
    error::AppError,
    handlers::AppState,
    metrics,
    models::api::{DistanceRequest, RouteEstimate},
    providers, validation,
};

/// Handle POST /api/v1/distance
pub async fn handle_distance(
    State(state): State<AppState>,
    Json(request): Json<DistanceRequest>,
) -> Result<Json<RouteEstimate>, AppError> {
    let start = Instant::now();
    metrics::record_request("distance");

    let outcome = estimate(&state, &request).await;

    if let Err(e) = &outcome {
        metrics::record_error("distance", e.type_name());
    }
    let estimate = outcome?;

    metrics::record_duration("distance", start.elapsed());
    tracing::info!(
        distance_km = estimate.distance_km,
        urban_percent = estimate.urban_percent,
        duration_ms = start.elapsed().as_millis() as u64,
        "Completed distance request"
    );

    Ok(Json(estimate))
}

async fn estimate(state: &AppState, request: &DistanceRequest) -> Result<RouteEstimate, AppError> {
    validation::validate_addresses(&request.origin, &request.destination)?;

    let config = state.config.load();
    if !config.gemini.enabled {
        return Err(AppError::ProviderDisabled(
            "Route estimator is disabled".to_string(),
        ));
    }

    providers::distance::estimate_route(
        &state.http_client,
        &config.gemini,
        &request.origin,
        &request.destination,
    )
    .await
}
