use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::{Config, CorsConfig},
    handlers::{self, AppState},
    metrics,
    signals::setup_signal_handlers,
};

/// Start the TCO advisor server
///
/// This function:
/// 1. Initializes metrics
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics());

    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    // Setup signal handlers (SIGTERM, SIGINT for shutdown; SIGHUP for reload)
    let (shutdown_tx, signal_handle) = setup_signal_handlers(config_swap.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app_state = AppState {
        config: config_swap.clone(),
        http_client: reqwest::Client::new(),
    };

    let app = create_router(app_state, metrics_handle, &config);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting TCO advisor on {}", addr);
    info!(
        "Configuration: provider {} ({}), {} allowed origins",
        if config.gemini.enabled { "enabled" } else { "disabled" },
        config.gemini.model,
        config.cors.allowed_origins.len()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    app_state: AppState,
    metrics_handle: Arc<metrics_exporter_prometheus::PrometheusHandle>,
    config: &Config,
) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/compare", post(handlers::compare::handle_compare))
        .route("/api/v1/distance", post(handlers::distance::handle_distance))
        .route(
            "/api/v1/recommendation",
            post(handlers::recommendation::handle_recommendation),
        )
        .with_state(app_state);

    let mut public_routes = Router::new()
        // Public endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));
    if config.metrics.enabled {
        public_routes = public_routes.route(
            config.metrics.endpoint.as_str(),
            get(handlers::metrics_handler::metrics),
        );
    }

    public_routes
        .with_state(metrics_handle)
        .merge(api_routes)
        // Calculator payloads are tiny; anything bigger is abuse
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer for the browser front-end
fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
