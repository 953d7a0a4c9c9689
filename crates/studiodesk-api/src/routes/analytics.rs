use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use studiodesk_analytics::{compute_analytics, AnalyticsAggregate, AnalyticsQuery};

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    pub range: Option<String>,
    pub studio: Option<String>,
}

/// Dashboard aggregates
///
/// A store failure is logged and returned as an all-empty aggregate.
#[utoipa::path(
    get,
    path = "/analytics",
    params(
        ("range" = Option<String>, Query, description = "7d, 30d, 90d or 12m"),
        ("studio" = Option<String>, Query, description = "all, or a studio id")
    ),
    responses(
        (status = 200, description = "Aggregate series"),
        (status = 400, description = "Unknown range")
    ),
    tag = "analytics"
)]
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalyticsParams>,
) -> ApiResult<Json<AnalyticsAggregate>> {
    let query = AnalyticsQuery::parse(params.range.as_deref(), params.studio.as_deref())?;
    let aggregate = compute_analytics(state.store.as_ref(), &query).await;
    Ok(Json(aggregate))
}
