use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use studiodesk_types::{ConversationTurn, TicketDraft, TicketReceipt, Transcript};

use crate::error::FlowError;
use crate::extraction::{parse_reply, AssistantReply};
use crate::gateway::{AnalysisRequest, AnalysisResult, Gateway, HistoryTurn};
use crate::materializer::Materializer;

pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, I encountered an error. Please try again or describe your feedback differently.";

pub const TICKET_FAILED_MESSAGE: &str =
    "I apologize, but I couldn't create the ticket. Please try again or submit feedback manually.";

pub const FOLLOW_UP_MESSAGE: &str =
    "I understand. Could you tell me more about the trainer and what happened?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AwaitingReply,
    Materializing,
}

/// Transient toast raised when a ticket is created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    fn ticket_created(receipt: &TicketReceipt) -> Self {
        Self {
            title: "Ticket Created".to_string(),
            description: format!("Feedback ticket {} has been created", receipt.ticket_number),
        }
    }
}

/// What one submission appended to the transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    pub turns: Vec<ConversationTurn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<TicketReceipt>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: String,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub turns: Vec<ConversationTurn>,
}

/// One user's feedback conversation
///
/// Owns its transcript; at most one submission runs at a time.
pub struct ChatSession {
    id: String,
    reporter: Option<String>,
    created_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
    transcript: Transcript,
    state: SessionState,
    gateway: Arc<Gateway>,
    materializer: Arc<Materializer>,
}

impl ChatSession {
    pub fn new(gateway: Arc<Gateway>, materializer: Arc<Materializer>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            reporter: None,
            created_at: now,
            last_active: now,
            transcript: Transcript::new(),
            state: SessionState::Idle,
            gateway,
            materializer,
        }
    }

    /// User id recorded as `reportedByUserId` on tickets from this session
    pub fn with_reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = Some(reporter.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn reporter(&self) -> Option<&str> {
        self.reporter.as_deref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Time of the last submission, or creation when there was none
    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            state: self.state,
            created_at: self.created_at,
            turns: self.transcript.turns().to_vec(),
        }
    }

    /// Run one user turn to completion
    ///
    /// Upstream and storage failures become assistant turns; only empty input and
    /// a non-idle session are reported as errors.
    pub async fn submit(&mut self, input: &str) -> Result<TurnOutcome, FlowError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(FlowError::EmptyInput);
        }
        if self.state != SessionState::Idle {
            return Err(FlowError::Busy);
        }

        self.last_active = Utc::now();
        let history: Vec<HistoryTurn> = self.transcript.history().map(HistoryTurn::from).collect();
        let mut outcome = TurnOutcome {
            turns: Vec::new(),
            notification: None,
            ticket: None,
        };
        self.append(&mut outcome, ConversationTurn::user(input));

        self.state = SessionState::AwaitingReply;
        tracing::debug!(session_id = %self.id, history = history.len(), "Awaiting assistant reply");

        let result = self
            .gateway
            .analyze(AnalysisRequest::conversational(input, history))
            .await;

        let reply = match result {
            Ok(AnalysisResult::Reply { chat_response }) => parse_reply(&chat_response),
            Ok(other) => {
                tracing::warn!(session_id = %self.id, degraded = other.is_degraded(), "No usable assistant reply");
                self.append(&mut outcome, ConversationTurn::assistant(APOLOGY_MESSAGE));
                self.state = SessionState::Idle;
                return Ok(outcome);
            }
            Err(e) => {
                self.state = SessionState::Idle;
                return Err(e.into());
            }
        };

        match reply {
            AssistantReply::NeedsMoreInfo { text } => {
                let text = if text.is_empty() {
                    FOLLOW_UP_MESSAGE.to_string()
                } else {
                    text
                };
                self.append(&mut outcome, ConversationTurn::assistant(text));
            }
            AssistantReply::Ready { draft } => {
                self.append(&mut outcome, ConversationTurn::assistant(summary_message(&draft)));
                self.materialize(&mut outcome, &draft).await;
            }
        }

        self.state = SessionState::Idle;
        Ok(outcome)
    }

    async fn materialize(&mut self, outcome: &mut TurnOutcome, draft: &TicketDraft) {
        self.state = SessionState::Materializing;

        match self.materializer.create_ticket(draft, self.reporter.as_deref()).await {
            Ok(receipt) => {
                tracing::info!(
                    session_id = %self.id,
                    ticket_number = %receipt.ticket_number,
                    "Ticket created from conversation"
                );
                let turn = ConversationTurn::assistant(confirmation_message(&receipt))
                    .with_ticket(receipt.clone());
                self.append(outcome, turn);
                outcome.notification = Some(Notification::ticket_created(&receipt));
                outcome.ticket = Some(receipt);
            }
            Err(e) => {
                tracing::error!(session_id = %self.id, error = %e, "Ticket creation failed");
                self.append(outcome, ConversationTurn::assistant(TICKET_FAILED_MESSAGE));
            }
        }
    }

    fn append(&mut self, outcome: &mut TurnOutcome, turn: ConversationTurn) {
        outcome.turns.push(turn.clone());
        self.transcript.push(turn);
    }
}

fn summary_message(draft: &TicketDraft) -> String {
    format!(
        "Great! I've gathered all the information. Here's what I'll create:\n\n\
         **Title:** {}\n\
         **Category:** {}\n\
         **Priority:** {}\n\
         **Trainer:** {}\n\n\
         Would you like me to create this ticket?",
        draft.title,
        draft.category.as_deref().unwrap_or("Uncategorized"),
        draft.resolved_priority(),
        draft.trainer_name.as_deref().unwrap_or("Not specified"),
    )
}

fn confirmation_message(receipt: &TicketReceipt) -> String {
    format!(
        "✅ Ticket created successfully!\n\n\
         **Ticket Number:** {}\n\n\
         Your feedback has been recorded and will be reviewed by the team. Thank you for helping us improve!",
        receipt.ticket_number
    )
}
