use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::{json, Value};
use studiodesk_api::{app::build_router, config::Config, error::ApiError, state::AppState};
use studiodesk_flow::{Gateway, GatewayConfig};
use studiodesk_llm::{ChatClient, ChatRequest, ChatResponse};
use studiodesk_persist::{InMemoryTicketStore, TicketStore};
use tower::ServiceExt;

struct ScriptedClient {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedClient {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
        }
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn chat(&self, _request: ChatRequest) -> anyhow::Result<ChatResponse> {
        let content = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))?;
        Ok(ChatResponse {
            content: Some(content),
            usage: None,
            finish_reason: Some("stop".into()),
            raw: Value::Null,
        })
    }
}

const READY_REPLY: &str = "Thanks!\n```json\n{\"ready\": true, \"ticketData\": {\"title\": \"Trainer Feedback - Anisha\", \"description\": \"Late and rude\", \"category\": \"Customer Service\", \"priority\": \"high\", \"trainerName\": \"Anisha\", \"tags\": [\"punctuality\"]}}\n```";

fn app_with(gateway: Gateway, store: Arc<dyn TicketStore>) -> Router {
    let state = Arc::new(AppState::new(Config::default(), store, gateway));
    build_router(state)
}

fn scripted_app(replies: &[&str]) -> (Router, Arc<InMemoryTicketStore>) {
    let store = Arc::new(InMemoryTicketStore::seeded());
    let gateway = Gateway::new(Arc::new(ScriptedClient::new(replies)), GatewayConfig::default());
    (app_with(gateway, store.clone()), store)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    read(response).await
}

async fn read(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_services() {
    let (app, _) = scripted_app(&[]);
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["store"], "memory connected");
    assert_eq!(body["services"]["llm"], "configured");
}

#[tokio::test]
async fn test_health_degraded_without_credential() {
    let store = Arc::new(InMemoryTicketStore::seeded());
    let app = app_with(Gateway::unconfigured(GatewayConfig::default()), store);

    let (_, body) = send(&app, get("/health")).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["llm"], "not configured");
}

#[tokio::test]
async fn test_taxonomy() {
    let (app, _) = scripted_app(&[]);
    let (status, body) = send(&app, get("/taxonomy")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["studios"].as_array().unwrap().len(), 8);
    assert_eq!(body["trainers"].as_array().unwrap().len(), 30);
    assert_eq!(body["categories"].as_array().unwrap().len(), 9);
    assert_eq!(body["departments"].as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn test_chat_session_creates_ticket() {
    let (app, store) = scripted_app(&["Which class was it?", READY_REPLY]);

    let (status, session) = send(&app, post_json("/sessions", json!({ "user_id": "user-1" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = session["id"].as_str().unwrap().to_string();
    assert_eq!(session["turns"].as_array().unwrap().len(), 1);
    assert_eq!(session["state"], "idle");

    let uri = format!("/sessions/{}/messages", id);
    let (status, outcome) = send(&app, post_json(&uri, json!({ "content": "Anisha was late" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["turns"].as_array().unwrap().len(), 2);
    assert!(outcome.get("ticket").is_none());

    let (status, outcome) = send(&app, post_json(&uri, json!({ "content": "Morning yoga, today" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["turns"].as_array().unwrap().len(), 3);
    assert_eq!(outcome["notification"]["title"], "Ticket Created");
    assert_eq!(outcome["ticket"]["priority"], "high");
    assert!(outcome["turns"][2]["ticketCreated"]["ticketNumber"].is_string());

    let (_, session) = send(&app, get(&format!("/sessions/{}", id))).await;
    assert_eq!(session["turns"].as_array().unwrap().len(), 6);

    let tickets = store.list_tickets().await.unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].reported_by_user_id.as_deref(), Some("user-1"));
}

#[tokio::test]
async fn test_create_session_without_body() {
    let (app, _) = scripted_app(&[]);
    let request = Request::builder()
        .method("POST")
        .uri("/sessions")
        .body(Body::empty())
        .unwrap();

    let (status, session) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(session["id"].is_string());
}

#[tokio::test]
async fn test_empty_message_is_bad_request() {
    let (app, _) = scripted_app(&[]);
    let (_, session) = send(&app, post_json("/sessions", json!({}))).await;
    let uri = format!("/sessions/{}/messages", session["id"].as_str().unwrap());

    let (status, body) = send(&app, post_json(&uri, json!({ "content": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let (app, _) = scripted_app(&[]);

    let (status, _) = send(&app, get("/sessions/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, post_json("/sessions/nope/messages", json!({ "content": "hi" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_closed_session_is_not_found() {
    let (app, _) = scripted_app(&[]);
    let (_, session) = send(&app, post_json("/sessions", json!({}))).await;
    let uri = format!("/sessions/{}", session["id"].as_str().unwrap());
    let delete = || Request::builder().method("DELETE").uri(&uri).body(Body::empty()).unwrap();

    let (status, _) = send(&app, delete()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, post_json(&format!("{}/messages", uri), json!({ "content": "hi" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_busy_session_is_conflict() {
    let store = Arc::new(InMemoryTicketStore::seeded());
    let gateway = Gateway::new(Arc::new(ScriptedClient::new(&["ok"])), GatewayConfig::default());
    let state = Arc::new(AppState::new(Config::default(), store, gateway));
    let app = build_router(state.clone());

    let snapshot = state.sessions.create(None).await;
    let session = state.sessions.get(&snapshot.id).await.unwrap();
    let _held = session.lock().await;

    let uri = format!("/sessions/{}/messages", snapshot.id);
    let (status, body) = send(&app, post_json(&uri, json!({ "content": "hello" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_analyze_single_shot() {
    let (app, _) = scripted_app(&[r#"{"sentiment":"positive","score":88,"tags":["motivation"],"insights":"Great energy"}"#]);

    let (status, body) = send(
        &app,
        post_json(
            "/analyze",
            json!({ "title": "Great class", "description": "Loved it", "trainerName": "Anisha" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["score"], 88);
    assert_eq!(body["insights"], "Great energy");
}

#[tokio::test]
async fn test_analyze_without_credential_is_degraded() {
    let store = Arc::new(InMemoryTicketStore::seeded());
    let app = app_with(Gateway::unconfigured(GatewayConfig::default()), store);

    let (status, body) = send(&app, post_json("/analyze", json!({ "title": "t", "description": "d" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "neutral");
    assert_eq!(body["score"], 50.0);
    assert_eq!(body["tags"], json!(["pending-analysis"]));
}

#[tokio::test]
async fn test_analyze_empty_is_bad_request() {
    let (app, _) = scripted_app(&[]);
    let (status, _) = send(&app, post_json("/analyze", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analytics() {
    let (app, _) = scripted_app(&[]);

    let (status, body) = send(&app, get("/analytics?range=90d&studio=all")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["range"], "90d");
    assert_eq!(body["ticketTrend"].as_array().unwrap().len(), 30);
    assert_eq!(body["resolutionTimeByPriority"].as_array().unwrap().len(), 4);

    let (status, body) = send(&app, get("/analytics?range=2w")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("2w"));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (app, _) = scripted_app(&[]);
    let (status, body) = send(&app, get("/api/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/sessions/{session_id}/messages"].is_object());
    assert!(body["paths"]["/analytics"].is_object());
    assert!(body["paths"]["/sessions/{session_id}"]["delete"].is_object());
}

#[tokio::test]
async fn test_api_error_response() {
    let response = ApiError::BadRequest("Test error".to_string()).into_response();
    let (status, body) = read(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request: Test error" }));
}
