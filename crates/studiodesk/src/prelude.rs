//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use studiodesk::prelude::*;
//! ```

pub use crate::{
    ChatClient, ChatOptions, ChatRequest, ClientFactory, Message, OpenAIClient, ProviderConfig,
    Ticket, TicketDraft, TicketNumber, TicketReceipt, Priority, TicketStatus, ConversationTurn,
    TicketStore, InMemoryTicketStore, TicketStoreBuilder,
    Gateway, GatewayConfig, AnalysisRequest, AnalysisResult, ChatSession, Materializer,
    SessionRegistry, TurnOutcome,
    compute_analytics, AnalyticsAggregate, AnalyticsQuery,
};
