//! # Studiodesk
//!
//! Feedback desk for a chain of fitness studios. Members describe an experience
//! with a trainer in a chat, an LLM asks follow-up questions until it can emit a
//! structured draft, and the draft becomes a numbered ticket. Tickets feed a
//! dashboard of counts, trends and resolution times.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use studiodesk::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientFactory::create_chat_client(ProviderConfig::openai(
//!         std::env::var("OPENAI_API_KEY")?,
//!     ))?;
//!     let gateway = Arc::new(Gateway::new(client, GatewayConfig::default()));
//!
//!     let store: Arc<dyn TicketStore> = Arc::new(InMemoryTicketStore::seeded());
//!     let materializer = Arc::new(Materializer::new(store.clone()));
//!
//!     let mut session = ChatSession::new(gateway, materializer);
//!     let outcome = session
//!         .submit("Anisha arrived 20 minutes late to the 7am yoga class")
//!         .await?;
//!     for turn in outcome.turns {
//!         println!("{:?}: {}", turn.role, turn.content);
//!     }
//!
//!     let dashboard = compute_analytics(store.as_ref(), &AnalyticsQuery::default()).await;
//!     println!("{} tickets", dashboard.summary.total_tickets);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`studiodesk-types`**: taxonomy catalog, tickets, drafts and transcripts
//! - **`studiodesk-llm`**: chat-completion client (OpenAI and compatible endpoints)
//! - **`studiodesk-persist`**: ticket store with in-memory and MongoDB backends
//! - **`studiodesk-flow`**: analysis gateway, ticket materializer and chat sessions
//! - **`studiodesk-analytics`**: dashboard aggregation

pub mod prelude;

pub use studiodesk_types::{
    taxonomy, Category, ConversationTurn, ExtractionEnvelope, Priority, Role, Studio, Ticket,
    TicketDraft, TicketNumber, TicketReceipt, TicketStatus, Transcript,
};

pub use studiodesk_llm::{
    ChatClient, ChatOptions, ChatRequest, ChatResponse, ClientFactory, Content, Message,
    OpenAIClient, ProviderConfig,
};

pub use studiodesk_persist::{
    InMemoryTicketStore, PersistError, StoreBackend, TicketStore, TicketStoreBuilder,
};

#[cfg(feature = "mongodb")]
pub use studiodesk_persist::MongoTicketStore;

pub use studiodesk_flow::{
    AnalysisRequest, AnalysisResult, AssistantReply, ChatSession, FlowError, Gateway,
    GatewayConfig, GatewayError, MaterializeError, Materializer, SessionRegistry, TurnOutcome,
};

pub use studiodesk_analytics::{
    compute_analytics, AnalyticsAggregate, AnalyticsError, AnalyticsQuery, StudioFilter,
    TimeRange,
};
