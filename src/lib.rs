pub mod config;
pub mod error;
pub mod state;
pub mod models;
pub mod middleware;
pub mod routes;
pub mod store;
pub mod validate;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::middleware::request_log::log_requests;
use crate::state::{AppState, SharedState};
use crate::store::ProjectStore;

/// Build the router around a fresh, empty project store.
pub fn build_app(config: Config) -> (Router, SharedState) {
    let state: SharedState = Arc::new(AppState {
        projects: ProjectStore::new(),
        config,
    });

    let app = Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(axum::middleware::from_fn(log_requests))
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
