#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use studiodesk_flow::{Gateway, GatewayConfig, Materializer};
use studiodesk_llm::{ChatClient, ChatRequest, ChatResponse};
use studiodesk_persist::{
    CategoryRecord, InMemoryTicketStore, PersistError, StudioRecord, TicketStore,
};
use studiodesk_types::Ticket;

/// Replays canned replies in order and records every request
pub struct ScriptedClient {
    replies: Mutex<VecDeque<anyhow::Result<Option<String>>>>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(Some(text.to_string())));
        self
    }

    pub fn empty_reply(self) -> Self {
        self.replies.lock().unwrap().push_back(Ok(None));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(anyhow::anyhow!(message.to_string())));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn chat(&self, request: ChatRequest) -> anyhow::Result<ChatResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("script exhausted")));
        next.map(|content| ChatResponse {
            content,
            usage: None,
            finish_reason: Some("stop".into()),
            raw: serde_json::Value::Null,
        })
    }
}

/// Store whose every operation fails
pub struct FailingStore;

#[async_trait]
impl TicketStore for FailingStore {
    async fn insert_ticket(&self, _ticket: Ticket) -> Result<Ticket, PersistError> {
        Err(PersistError::Connection("store offline".into()))
    }

    async fn find_category_by_name(&self, _name: &str) -> Result<Option<CategoryRecord>, PersistError> {
        Err(PersistError::Connection("store offline".into()))
    }

    async fn first_studio(&self) -> Result<Option<StudioRecord>, PersistError> {
        Err(PersistError::Connection("store offline".into()))
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>, PersistError> {
        Err(PersistError::Connection("store offline".into()))
    }

    async fn ping(&self) -> Result<(), PersistError> {
        Err(PersistError::Connection("store offline".into()))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// Rejects the first `collisions` inserts as duplicate numbers, then delegates
pub struct CollidingStore {
    inner: InMemoryTicketStore,
    collisions: usize,
    pub attempts: AtomicUsize,
}

impl CollidingStore {
    pub fn new(collisions: usize) -> Self {
        Self {
            inner: InMemoryTicketStore::seeded(),
            collisions,
            attempts: AtomicUsize::new(0),
        }
    }

    pub async fn ticket_count(&self) -> usize {
        self.inner.ticket_count().await
    }
}

#[async_trait]
impl TicketStore for CollidingStore {
    async fn insert_ticket(&self, ticket: Ticket) -> Result<Ticket, PersistError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.collisions {
            return Err(PersistError::DuplicateTicketNumber(ticket.ticket_number.to_string()));
        }
        self.inner.insert_ticket(ticket).await
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<CategoryRecord>, PersistError> {
        self.inner.find_category_by_name(name).await
    }

    async fn first_studio(&self) -> Result<Option<StudioRecord>, PersistError> {
        self.inner.first_studio().await
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>, PersistError> {
        self.inner.list_tickets().await
    }

    async fn ping(&self) -> Result<(), PersistError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "colliding"
    }
}

pub fn gateway(client: Arc<ScriptedClient>) -> Arc<Gateway> {
    Arc::new(Gateway::new(client, GatewayConfig::default()))
}

pub fn materializer(store: Arc<dyn TicketStore>) -> Arc<Materializer> {
    Arc::new(Materializer::new(store))
}

pub const READY_REPLY: &str = r#"Thanks for sharing, I have what I need.

```json
{
  "ready": true,
  "ticketData": {
    "title": "Trainer Feedback - Anisha - Today",
    "description": "Trainer arrived 20 minutes late and was rude to members.",
    "category": "Customer Service",
    "subcategory": "Staff Professionalism",
    "priority": "high",
    "trainerName": "Anisha",
    "sentiment": "negative",
    "tags": ["punctuality", "professionalism"]
  }
}
```"#;

pub fn ready_reply_with_category(category: &str) -> String {
    READY_REPLY.replace("\"Customer Service\"", &format!("\"{}\"", category))
}
