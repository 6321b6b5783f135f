use std::sync::Arc;

use axum::{routing::get, Router};

use crate::collectors::MetricsSource;
use crate::config::AppConfig;

pub mod error;
pub mod info;

/// Path of the system information endpoint.
pub const INFO_PATH: &str = "/info";

/// Shared application state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<dyn MetricsSource>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(metrics: Arc<dyn MetricsSource>, config: AppConfig) -> Self {
        Self { metrics, config }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INFO_PATH, get(info::handler))
        .with_state(state)
}
