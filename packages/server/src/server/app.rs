//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use webhook_client::WebhookClient;

use crate::config::Config;
use crate::server::routes::{
    health_handler, inspect_form_handler, inspect_handler, live_form_handler, run_handler,
};

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Shared application state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub webhook: Arc<WebhookClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let webhook = WebhookClient::new(config.webhook.clone())
            .context("Failed to create webhook HTTP client")?;

        Ok(Self {
            config: Arc::new(config),
            webhook: Arc::new(webhook),
        })
    }
}

/// Build the Axum application router
pub fn build_app(config: Config) -> Result<Router> {
    let state = AppState::new(config)?;

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        // Live variant: brand + goal to the webhook
        .route("/", get(live_form_handler))
        .route("/run", get(live_form_handler).post(run_handler))
        // Upload variant: inspect an exported output file
        .route("/inspect", get(inspect_form_handler).post(inspect_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
