use axum::{extract::State, Json};
use std::time::Instant;

use crate::{
    error::AppError,
    handlers::AppState,
    metrics,
    models::api::{RecommendationRequest, RecommendationResponse},
    providers, validation,
};

/// Handle POST /api/v1/recommendation
///
/// Takes already-computed results back from the client after they were
/// displayed, and returns free-text advice. The text is never consumed
/// programmatically beyond display.
pub async fn handle_recommendation(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let start = Instant::now();
    metrics::record_request("recommendation");

    let outcome = narrate(&state, &request).await;

    if let Err(e) = &outcome {
        metrics::record_error("recommendation", e.type_name());
    }
    let advice = outcome?;

    metrics::record_duration("recommendation", start.elapsed());
    tracing::info!(
        results = request.results.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Completed recommendation request"
    );

    Ok(Json(RecommendationResponse { advice }))
}

async fn narrate(state: &AppState, request: &RecommendationRequest) -> Result<String, AppError> {
    validation::validate_horizon(request.horizon_years)?;

    if request.results.is_empty() {
        return Err(AppError::Validation {
            field: "results".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    let config = state.config.load();
    if !config.gemini.enabled {
        return Err(AppError::ProviderDisabled(
            "Recommendation narrator is disabled".to_string(),
        ));
    }

    providers::narrator::recommend(
        &state.http_client,
        &config.gemini,
        &request.results,
        request.horizon_years,
    )
    .await
}
