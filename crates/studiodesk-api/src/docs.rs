use axum::Json;
use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::taxonomy::get_taxonomy,
        routes::sessions::create_session,
        routes::sessions::get_session,
        routes::sessions::close_session,
        routes::sessions::send_message,
        routes::analyze::analyze_feedback,
        routes::analytics::get_analytics,
    ),
    components(schemas(
        routes::health::HealthResponse,
        routes::sessions::CreateSessionRequest,
        routes::sessions::SendMessageRequest,
        routes::analyze::AnalyzeRequest,
    )),
    tags(
        (name = "health", description = "Liveness and dependency status"),
        (name = "taxonomy", description = "Studios, trainers, categories and other reference data"),
        (name = "sessions", description = "Conversational feedback intake"),
        (name = "analysis", description = "Single-shot sentiment analysis"),
        (name = "analytics", description = "Dashboard aggregates"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
