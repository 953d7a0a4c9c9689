use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    docs,
    middleware::logging,
    routes::{analytics, analyze, health, sessions, taxonomy},
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Reference data
        .route("/taxonomy", get(taxonomy::get_taxonomy))
        // Chat sessions
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/:session_id",
            get(sessions::get_session).delete(sessions::close_session),
        )
        .route("/sessions/:session_id/messages", post(sessions::send_message))
        // Single-shot analysis
        .route("/analyze", post(analyze::analyze_feedback))
        // Dashboard
        .route("/analytics", get(analytics::get_analytics))
        // OpenAPI document
        .route("/api/openapi.json", get(docs::openapi_json));

    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    api_routes
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let mut cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors = cors.allow_origin(Any);
        } else {
            let origins: Vec<axum::http::HeaderValue> = config
                .cors
                .origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            cors = cors.allow_origin(origins);
        }

        cors
    } else {
        CorsLayer::permissive()
    }
}
