use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use rand::Rng;
use serde_json::{Map, Value};
use studiodesk_persist::{PersistError, TicketStore};
use studiodesk_types::{Ticket, TicketDraft, TicketNumber, TicketReceipt, TicketStatus, CHAT_SOURCE};

use crate::error::MaterializeError;

/// Draws allowed before giving up on a free ticket number
pub const MAX_NUMBER_ATTEMPTS: usize = 5;

const FEEDBACK_TYPE: &str = "trainer-feedback";

/// `TKT-YYMMDD-NNNN` for `date` with a uniform random four-digit suffix
pub fn draw_ticket_number(date: NaiveDate) -> TicketNumber {
    let suffix = rand::thread_rng().gen_range(0..10_000u16);
    TicketNumber::new(date, suffix)
}

/// Turns a ready draft into a stored ticket
///
/// Not idempotent: each call inserts a new row.
pub struct Materializer {
    store: Arc<dyn TicketStore>,
}

impl Materializer {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    pub async fn create_ticket(
        &self,
        draft: &TicketDraft,
        reporter: Option<&str>,
    ) -> Result<TicketReceipt, MaterializeError> {
        let today = Local::now().date_naive();
        let mut ticket = Ticket::new(
            draw_ticket_number(today),
            draft.title.clone(),
            draft.description.clone(),
            Utc::now(),
        );
        ticket.category_id = self.resolve_category_id(draft.category.as_deref()).await;
        ticket.studio_id = self.default_studio_id().await;
        ticket.priority = draft.resolved_priority();
        ticket.status = TicketStatus::New;
        ticket.source = CHAT_SOURCE.to_string();
        ticket.tags = draft.tags.clone();
        ticket.reported_by_user_id = reporter.map(str::to_string);
        ticket.dynamic_field_data = dynamic_fields(draft);

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            if attempt > 1 {
                ticket.ticket_number = draw_ticket_number(today);
            }

            match self.store.insert_ticket(ticket.clone()).await {
                Ok(stored) => {
                    tracing::info!(
                        ticket_number = %stored.ticket_number,
                        category_id = ?stored.category_id,
                        priority = %stored.priority,
                        "Ticket created"
                    );
                    return Ok(TicketReceipt {
                        ticket_number: stored.ticket_number,
                        title: stored.title,
                        category: draft.category.clone(),
                        priority: stored.priority,
                    });
                }
                Err(PersistError::DuplicateTicketNumber(number)) => {
                    tracing::warn!(%number, attempt, "Ticket number taken, drawing another");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to insert ticket");
                    return Err(e.into());
                }
            }
        }

        Err(MaterializeError::NumberExhausted(MAX_NUMBER_ATTEMPTS))
    }

    async fn resolve_category_id(&self, name: Option<&str>) -> Option<String> {
        let name = name?;
        match self.store.find_category_by_name(name).await {
            Ok(Some(category)) => Some(category.id),
            Ok(None) => {
                tracing::debug!(category = name, "No category with this name");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, category = name, "Category lookup failed");
                None
            }
        }
    }

    async fn default_studio_id(&self) -> Option<String> {
        match self.store.first_studio().await {
            Ok(studio) => studio.map(|s| s.id),
            Err(e) => {
                tracing::warn!(error = %e, "Studio lookup failed");
                None
            }
        }
    }
}

fn dynamic_fields(draft: &TicketDraft) -> Map<String, Value> {
    let mut fields = Map::new();
    if let Some(trainer) = &draft.trainer_name {
        fields.insert("trainerName".into(), Value::String(trainer.clone()));
    }
    if let Some(sentiment) = &draft.sentiment {
        fields.insert("sentiment".into(), Value::String(sentiment.clone()));
    }
    fields.insert("feedbackType".into(), Value::String(FEEDBACK_TYPE.into()));
    fields.insert("aiGenerated".into(), Value::Bool(true));
    fields
}
