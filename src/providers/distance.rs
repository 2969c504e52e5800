//! Route/Distance Estimator
//!
//! The original system has no routing engine; the same generative
//! endpoint estimates the distance and the urban share of the route.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::{
    config::GeminiConfig,
    error::AppError,
    metrics,
    models::{
        api::RouteEstimate,
        gemini::{GenerateContentRequest, GenerateContentResponse},
    },
    providers::gemini,
};

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "distance_km": { "type": "number" },
            "urban_percent": { "type": "number" }
        },
        "required": ["distance_km", "urban_percent"]
    })
}

fn build_prompt(origin: &str, destination: &str) -> String {
    format!(
        "Estimate the driving route from \"{}\" to \"{}\". Return the one-way \
         driving distance in kilometers and the approximate percentage of the \
         route that runs through urban traffic (0-100).",
        origin, destination
    )
}

/// Estimate distance and urban share between two free-text addresses
///
/// Address validation happens at the handler, before this is called.
pub async fn estimate_route(
    client: &Client,
    config: &GeminiConfig,
    origin: &str,
    destination: &str,
) -> Result<RouteEstimate, AppError> {
    let request =
        GenerateContentRequest::single_turn(build_prompt(origin, destination), Some(response_schema()));

    let response = match gemini::generate_content(client, config, request).await {
        Ok(response) => response,
        Err(e) => {
            metrics::record_provider_call("distance", "error");
            return Err(e);
        }
    };

    let body: GenerateContentResponse = response.json().await.map_err(|e| {
        metrics::record_provider_call("distance", "error");
        AppError::from(e)
    })?;

    let text = body.first_text().ok_or_else(|| {
        metrics::record_provider_call("distance", "error");
        AppError::SchemaError("Distance response contained no text".to_string())
    })?;

    let mut estimate: RouteEstimate = serde_json::from_str(text).map_err(|e| {
        metrics::record_provider_call("distance", "error");
        AppError::SchemaError(format!("Distance payload did not match schema: {}", e))
    })?;

    // The contract promises 0-100; the model occasionally strays.
    estimate.urban_percent = estimate.urban_percent.clamp(0.0, 100.0);

    debug!(
        distance_km = estimate.distance_km,
        urban_percent = estimate.urban_percent,
        "Estimated route"
    );
    metrics::record_provider_call("distance", "ok");

    Ok(estimate)
}
