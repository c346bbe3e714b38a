//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::SwatchPage;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Random source for shade generation, shared by all requests
    pub rng: Arc<Mutex<StdRng>>,
    pub swatch_page: Arc<SwatchPage>,
    /// Swatches per family on the swatch page
    pub swatches: usize,
}

/// Create application state from configuration.
///
/// A configured seed makes the sequence of generated shades reproducible.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let rng = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let swatch_page = SwatchPage::new()
        .map_err(|e| anyhow::anyhow!("Failed to create swatch page: {e}"))?;

    Ok(AppState {
        rng: Arc::new(Mutex::new(rng)),
        swatch_page: Arc::new(swatch_page),
        swatches: config.swatches,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/random", get(api::handle_random))
        .route("/random/:color", get(api::handle_random_family))
        .route("/invert", post(api::handle_invert))
        .route("/family/find", post(api::handle_family_find))
        .route("/family", get(api::handle_family_list))
        .route("/swatches", get(api::handle_swatches))
        // Health check
        .route("/healthz", get(api::handle_healthz))
        .route("/", get(api::handle_healthz))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
