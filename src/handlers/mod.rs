pub mod compare;
pub mod distance;
pub mod health;
pub mod metrics_handler;
pub mod recommendation;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::Config;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
    pub http_client: reqwest::Client,
}
