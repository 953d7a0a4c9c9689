use async_trait::async_trait;
use studiodesk_types::{taxonomy, Ticket};
use tokio::sync::RwLock;

use crate::error::{PersistError, Result};
use crate::models::{CategoryRecord, StudioRecord};
use crate::trait_client::TicketStore;

/// Process-local store, used for tests and single-node demos
#[derive(Default)]
pub struct InMemoryTicketStore {
    tickets: RwLock<Vec<Ticket>>,
    categories: Vec<CategoryRecord>,
    studios: Vec<StudioRecord>,
}

impl InMemoryTicketStore {
    /// Empty store with no reference rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with categories and studios copied from the taxonomy registry
    pub fn seeded() -> Self {
        Self::new()
            .with_categories(taxonomy::CATEGORIES.iter().map(CategoryRecord::from).collect())
            .with_studios(taxonomy::STUDIOS.iter().map(StudioRecord::from).collect())
    }

    pub fn with_categories(mut self, categories: Vec<CategoryRecord>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_studios(mut self, studios: Vec<StudioRecord>) -> Self {
        self.studios = studios;
        self
    }

    pub fn with_tickets(self, tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: RwLock::new(tickets),
            ..self
        }
    }

    pub async fn ticket_count(&self) -> usize {
        self.tickets.read().await.len()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn insert_ticket(&self, ticket: Ticket) -> Result<Ticket> {
        let mut tickets = self.tickets.write().await;
        if tickets.iter().any(|t| t.ticket_number == ticket.ticket_number) {
            return Err(PersistError::DuplicateTicketNumber(ticket.ticket_number.to_string()));
        }
        tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<CategoryRecord>> {
        Ok(self.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn first_studio(&self) -> Result<Option<StudioRecord>> {
        Ok(self.studios.first().cloned())
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets.read().await.clone())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use studiodesk_types::TicketNumber;

    fn ticket(suffix: u16) -> Ticket {
        let now = Utc::now();
        Ticket::new(TicketNumber::new(now.date_naive(), suffix), "title", "description", now)
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let store = InMemoryTicketStore::new();
        store.insert_ticket(ticket(1)).await.unwrap();
        store.insert_ticket(ticket(2)).await.unwrap();

        let tickets = store.list_tickets().await.unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(store.ticket_count().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_ticket_number_rejected() {
        let store = InMemoryTicketStore::new();
        store.insert_ticket(ticket(7)).await.unwrap();

        let err = store.insert_ticket(ticket(7)).await.unwrap_err();
        assert!(matches!(err, PersistError::DuplicateTicketNumber(_)));
        assert_eq!(store.ticket_count().await, 1);
    }

    #[tokio::test]
    async fn test_seeded_reference_rows() {
        let store = InMemoryTicketStore::seeded();

        let category = store.find_category_by_name("Customer Service").await.unwrap();
        assert_eq!(category.unwrap().id, "92c1ab90-cefb-452c-b555-7bb4e86afb8e");
        assert!(store.find_category_by_name("Trainer Feedback").await.unwrap().is_none());

        let studio = store.first_studio().await.unwrap().unwrap();
        assert_eq!(studio.id, "kwality-house");
    }

    #[tokio::test]
    async fn test_empty_store_has_no_studio() {
        let store = InMemoryTicketStore::new();
        assert!(store.first_studio().await.unwrap().is_none());
        assert_eq!(store.backend_name(), "memory");
    }
}
