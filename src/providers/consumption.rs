//! Consumption Data Provider
//!
//! Asks the model for average consumption figures per powertrain variant
//! using a structured-output schema, so the response text is machine-
//! parseable JSON. A partial record set is passed through as-is; missing
//! variants are never fabricated here.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::{
    config::GeminiConfig,
    error::AppError,
    metrics,
    models::{
        gemini::{GenerateContentRequest, GenerateContentResponse},
        vehicle::FuelEconomy,
    },
    providers::gemini,
};

const CONSUMPTION_PROMPT: &str = "Provide realistic average fuel consumption figures for a \
typical modern compact car in each of these powertrain variants: gasoline, diesel, lpg, \
hybrid, plugin_hybrid. For every variant give a short display name, city and highway \
consumption in liters per 100 km, and for the plug-in hybrid additionally the electric \
city consumption in kWh per 100 km (0 for all other variants). For the plug-in hybrid the \
city liters figure is the small residual gasoline draw while driving mostly electric.";

fn response_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "variant": {
                    "type": "string",
                    "enum": ["gasoline", "diesel", "lpg", "hybrid", "plugin_hybrid"]
                },
                "city": { "type": "number" },
                "highway": { "type": "number" },
                "city_kwh": { "type": "number" }
            },
            "required": ["name", "variant", "city", "highway", "city_kwh"]
        }
    })
}

/// Fetch one consumption record per variant from the provider
pub async fn fetch_fuel_economy(
    client: &Client,
    config: &GeminiConfig,
) -> Result<Vec<FuelEconomy>, AppError> {
    let request = GenerateContentRequest::single_turn(CONSUMPTION_PROMPT, Some(response_schema()));

    let response = match gemini::generate_content(client, config, request).await {
        Ok(response) => response,
        Err(e) => {
            metrics::record_provider_call("consumption", "error");
            return Err(e);
        }
    };

    let body: GenerateContentResponse = response.json().await.map_err(|e| {
        metrics::record_provider_call("consumption", "error");
        AppError::from(e)
    })?;

    let text = body.first_text().ok_or_else(|| {
        metrics::record_provider_call("consumption", "error");
        AppError::SchemaError("Consumption response contained no text".to_string())
    })?;

    let records: Vec<FuelEconomy> = serde_json::from_str(text).map_err(|e| {
        metrics::record_provider_call("consumption", "error");
        AppError::SchemaError(format!("Consumption payload did not match schema: {}", e))
    })?;

    if records.is_empty() {
        metrics::record_provider_call("consumption", "error");
        return Err(AppError::SchemaError(
            "Consumption response contained no records".to_string(),
        ));
    }

    if records.len() < 5 {
        warn!(
            records = records.len(),
            "Provider returned a partial consumption set"
        );
    }

    debug!(records = records.len(), "Fetched consumption records");
    metrics::record_provider_call("consumption", "ok");

    Ok(records)
}
