use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use studiodesk_flow::{AnalysisRequest, AnalysisResult};
use utoipa::ToSchema;

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Analyzed instead of title and description when present
    #[serde(default)]
    pub feedback: Option<String>,
    /// Switches to the trainer-feedback prompt
    #[serde(default)]
    pub trainer_name: Option<String>,
}

/// Sentiment analysis of a ticket or trainer feedback
///
/// Upstream failures still return 200 with the neutral degraded result.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis object, or the degraded neutral result"),
        (status = 400, description = "Nothing to analyze")
    ),
    tag = "analysis"
)]
pub async fn analyze_feedback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalysisResult>> {
    let request = AnalysisRequest::for_ticket(
        &req.title,
        &req.description,
        req.feedback.as_deref(),
        req.trainer_name.as_deref(),
    );

    let result = state.gateway.analyze(request).await?;
    Ok(Json(result))
}
