use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: HashMap<String, String>,
}

/// Health check endpoint
///
/// Reports the store backend's reachability and whether the LLM credential is set.
/// Always 200; a missing credential or unreachable store shows up as `degraded`.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut services = HashMap::new();
    let mut healthy = true;

    let backend = state.store.backend_name();
    match state.store.ping().await {
        Ok(()) => {
            services.insert("store".to_string(), format!("{} connected", backend));
        }
        Err(e) => {
            tracing::warn!(error = %e, backend, "Store health check failed");
            services.insert("store".to_string(), format!("{} disconnected", backend));
            healthy = false;
        }
    }

    if state.gateway.is_configured() {
        services.insert("llm".to_string(), "configured".to_string());
    } else {
        services.insert("llm".to_string(), "not configured".to_string());
        healthy = false;
    }

    services.insert(
        "sessions".to_string(),
        state.sessions.len().await.to_string(),
    );

    Json(HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    })
}
