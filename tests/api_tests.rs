/// Router-level tests with httpmock standing in for the Gemini API
use arc_swap::ArcSwap;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use tco_advisor::{
    config::{Config, CorsConfig, GeminiConfig, MetricsConfig, ServerConfig},
    handlers::AppState,
    models::api::{CompareResponse, RecommendationResponse, RouteEstimate},
    server::create_router,
};

fn test_config(base_url: &str, enabled: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        },
        gemini: GeminiConfig {
            enabled,
            api_key: "test-key".to_string(),
            base_url: base_url.to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds: 5,
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
        metrics: MetricsConfig {
            enabled: true,
            endpoint: "/metrics".to_string(),
        },
    }
}

fn build_app(config: Config) -> Router {
    let app_state = AppState {
        config: Arc::new(ArcSwap::from_pointee(config.clone())),
        http_client: reqwest::Client::new(),
    };
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    create_router(app_state, Arc::new(recorder.handle()), &config)
}

/// A Gemini response whose single text part carries `payload`
fn gemini_body(payload: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": payload }]
            },
            "finishReason": "STOP"
        }]
    })
}

fn compare_request_body() -> Value {
    json!({
        "profile": {
            "commute_km": 25.0,
            "weekend_trip_km": 150.0,
            "route_mix": "mixed"
        },
        "prices": {
            "gasoline": 1.6,
            "diesel": 1.7,
            "lpg": 0.8,
            "electricity": 0.2,
            "purchase": {
                "gasoline": 25000.0,
                "diesel": 28000.0,
                "lpg": 26000.0,
                "hybrid": 29000.0,
                "plugin_hybrid": 34000.0
            }
        },
        "horizon_years": 7
    })
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_compare_end_to_end() {
    let server = MockServer::start_async().await;

    let consumption = json!([
        {"name": "Gasoline", "variant": "gasoline", "city": 7.0, "highway": 5.5, "city_kwh": 0.0},
        {"name": "Diesel", "variant": "diesel", "city": 5.5, "highway": 4.2, "city_kwh": 0.0},
        {"name": "Plug-in hybrid", "variant": "plugin_hybrid", "city": 1.5, "highway": 5.0, "city_kwh": 15.0}
    ]);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/models/gemini-1.5-flash:generateContent")
                .query_param("key", "test-key");
            then.status(200)
                .json_body(gemini_body(&consumption.to_string()));
        })
        .await;

    let app = build_app(test_config(&server.base_url(), true));
    let (status, body) = post(app, "/api/v1/compare", compare_request_body()).await;

    assert_eq!(status, StatusCode::OK);
    mock.assert_async().await;

    let response: CompareResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.results.len(), 3);
    assert!((response.annual_city_km - 10400.0).abs() < 1e-6);
    assert!((response.annual_highway_km - 10400.0).abs() < 1e-6);

    for pair in response.results.windows(2) {
        assert!(pair[0].total_cost <= pair[1].total_cost);
    }

    let gasoline = response
        .results
        .iter()
        .find(|r| r.name == "Gasoline")
        .unwrap();
    assert!((gasoline.total_cost - 39560.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_compare_validation_short_circuits_provider() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path_includes("generateContent");
            then.status(200).json_body(gemini_body("[]"));
        })
        .await;

    let app = build_app(test_config(&server.base_url(), true));
    let mut body = compare_request_body();
    body["profile"]["commute_km"] = json!(-5.0);

    let (status, error_body) = post(app, "/api/v1/compare", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_body["error"]["type"], "validation_error");
    assert_eq!(error_body["error"]["field"], "profile.commute_km");
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_compare_upstream_status_passes_through() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path_includes("generateContent");
            then.status(429).body("quota exceeded");
        })
        .await;

    let app = build_app(test_config(&server.base_url(), true));
    let (status, body) = post(app, "/api/v1/compare", compare_request_body()).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"]["type"], "upstream_error");
}

#[tokio::test]
async fn test_compare_unparseable_payload_is_bad_gateway() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path_includes("generateContent");
            then.status(200)
                .json_body(gemini_body("certainly! here are some figures..."));
        })
        .await;

    let app = build_app(test_config(&server.base_url(), true));
    let (status, body) = post(app, "/api/v1/compare", compare_request_body()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["type"], "schema_error");
}

#[tokio::test]
async fn test_compare_with_disabled_provider() {
    let app = build_app(test_config("http://127.0.0.1:1", false));
    let (status, body) = post(app, "/api/v1/compare", compare_request_body()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["type"], "provider_disabled");
}

#[tokio::test]
async fn test_distance_empty_origin_rejected() {
    let app = build_app(test_config("http://127.0.0.1:1", true));
    let (status, body) = post(
        app,
        "/api/v1/distance",
        json!({"origin": "  ", "destination": "Berlin"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["field"], "origin");
}

#[tokio::test]
async fn test_distance_end_to_end() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path_includes("generateContent");
            then.status(200).json_body(gemini_body(
                &json!({"distance_km": 585.0, "urban_percent": 20.0}).to_string(),
            ));
        })
        .await;

    let app = build_app(test_config(&server.base_url(), true));
    let (status, body) = post(
        app,
        "/api/v1/distance",
        json!({"origin": "Munich", "destination": "Berlin"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let estimate: RouteEstimate = serde_json::from_value(body).unwrap();
    assert_eq!(estimate.distance_km, 585.0);
    assert_eq!(estimate.urban_percent, 20.0);
}

#[tokio::test]
async fn test_recommendation_end_to_end() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path_includes("generateContent");
            then.status(200)
                .json_body(gemini_body("  Buy the diesel; it pays back fastest.  "));
        })
        .await;

    let app = build_app(test_config(&server.base_url(), true));
    let (status, body) = post(
        app,
        "/api/v1/recommendation",
        json!({
            "horizon_years": 7,
            "results": [{
                "variant": "gasoline",
                "name": "Gasoline",
                "annual_cost": 2080.0,
                "purchase_price": 25000.0,
                "total_cost": 39560.0,
                "amortization_years": null,
                "annual_km": 20800.0
            }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: RecommendationResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.advice, "Buy the diesel; it pays back fastest.");
}

#[tokio::test]
async fn test_recommendation_requires_results() {
    let app = build_app(test_config("http://127.0.0.1:1", true));
    let (status, body) = post(
        app,
        "/api/v1/recommendation",
        json!({"horizon_years": 7, "results": []}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["field"], "results");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = build_app(test_config("http://127.0.0.1:1", true));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
