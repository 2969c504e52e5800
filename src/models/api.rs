//! Request/response bodies for the JSON API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::{CostResult, DrivingProfile, PriceSheet};

/// POST /api/v1/compare request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub profile: DrivingProfile,
    pub prices: PriceSheet,
    pub horizon_years: u32,
}

/// POST /api/v1/compare response body
///
/// Results are ordered ascending by total cost; the first entry is the
/// cheapest to own over the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub horizon_years: u32,
    pub annual_city_km: f64,
    pub annual_highway_km: f64,
    pub results: Vec<CostResult>,
}

/// POST /api/v1/distance request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub origin: String,
    pub destination: String,
}

/// Estimated route between two addresses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEstimate {
    /// One-way distance in km
    pub distance_km: f64,
    /// Share of the route in urban traffic, 0-100
    pub urban_percent: f64,
}

/// POST /api/v1/recommendation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub results: Vec<CostResult>,
    pub horizon_years: u32,
}

/// POST /api/v1/recommendation response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub advice: String,
}
