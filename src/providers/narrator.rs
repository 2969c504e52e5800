//! Recommendation Narrator
//!
//! Turns computed cost results into free-text advice. The text is
//! advisory only and never parsed beyond extracting the first part.

use reqwest::Client;
use std::fmt::Write as _;
use tracing::debug;

use crate::{
    config::GeminiConfig,
    error::AppError,
    metrics,
    models::{
        gemini::{GenerateContentRequest, GenerateContentResponse},
        vehicle::CostResult,
    },
    providers::gemini,
};

fn build_prompt(results: &[CostResult], horizon_years: u32) -> String {
    let mut prompt = format!(
        "A driver compared vehicle powertrains over a {}-year ownership horizon. \
         Per vehicle (ordered cheapest first):\n",
        horizon_years
    );

    for result in results {
        let _ = write!(
            prompt,
            "- {} ({}): purchase {:.0}, annual fuel/energy cost {:.0}, total {:.0}",
            result.name, result.variant, result.purchase_price, result.annual_cost,
            result.total_cost
        );
        match result.amortization_years {
            Some(years) => {
                let _ = writeln!(prompt, ", pays back its premium in {:.1} years", years);
            }
            None => {
                let _ = writeln!(prompt);
            }
        }
    }

    prompt.push_str(
        "\nIn a short paragraph, recommend which vehicle to buy and why, \
         mentioning the trade-off between purchase price and running costs.",
    );
    prompt
}

/// Ask the model for a short buying recommendation
pub async fn recommend(
    client: &Client,
    config: &GeminiConfig,
    results: &[CostResult],
    horizon_years: u32,
) -> Result<String, AppError> {
    let request = GenerateContentRequest::single_turn(build_prompt(results, horizon_years), None);

    let response = match gemini::generate_content(client, config, request).await {
        Ok(response) => response,
        Err(e) => {
            metrics::record_provider_call("recommendation", "error");
            return Err(e);
        }
    };

    let body: GenerateContentResponse = response.json().await.map_err(|e| {
        metrics::record_provider_call("recommendation", "error");
        AppError::from(e)
    })?;

    let advice = body
        .first_text()
        .ok_or_else(|| {
            metrics::record_provider_call("recommendation", "error");
            AppError::SchemaError("Recommendation response contained no text".to_string())
        })?
        .trim()
        .to_string();

    debug!(chars = advice.len(), "Received recommendation");
    metrics::record_provider_call("recommendation", "ok");

    Ok(advice)
}
