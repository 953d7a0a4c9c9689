use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ticket::TicketReceipt;

pub const WELCOME_TURN_ID: &str = "welcome";

pub const WELCOME_MESSAGE: &str = "Hi! I'm here to help you submit trainer feedback. Just tell me about your experience - which trainer, what class, and what happened. I'll help categorize it and create a ticket for you.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_created: Option<TicketReceipt>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role(Role::Assistant, content)
    }

    pub fn with_ticket(mut self, receipt: TicketReceipt) -> Self {
        self.ticket_created = Some(receipt);
        self
    }

    fn with_role(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            ticket_created: None,
        }
    }

    fn welcome() -> Self {
        Self {
            id: WELCOME_TURN_ID.to_string(),
            ..Self::assistant(WELCOME_MESSAGE)
        }
    }

    pub fn is_welcome(&self) -> bool {
        self.id == WELCOME_TURN_ID
    }
}

/// Append-only, chronologically ordered chat log
///
/// Turns can only be appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    /// New transcript holding only the greeting
    pub fn new() -> Self {
        Self {
            turns: vec![ConversationTurn::welcome()],
        }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    /// Turns worth sending upstream: everything but the synthetic greeting
    pub fn history(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter().filter(|turn| !turn.is_welcome())
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
