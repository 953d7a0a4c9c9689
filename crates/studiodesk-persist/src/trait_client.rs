use async_trait::async_trait;
use studiodesk_types::Ticket;

use crate::error::Result;
use crate::models::{CategoryRecord, StudioRecord};

/// Storage operations the ticket core relies on
///
/// Mirrors the `tickets`, `categories` and `studios` tables. Implementations must
/// reject a ticket whose `ticketNumber` is already stored with
/// [`PersistError::DuplicateTicketNumber`](crate::PersistError::DuplicateTicketNumber).
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Insert one ticket and return the stored row
    async fn insert_ticket(&self, ticket: Ticket) -> Result<Ticket>;

    /// Category whose name matches exactly
    async fn find_category_by_name(&self, name: &str) -> Result<Option<CategoryRecord>>;

    /// First studio of an unfiltered listing
    async fn first_studio(&self) -> Result<Option<StudioRecord>>;

    /// Every ticket, unfiltered and unpaginated
    async fn list_tickets(&self) -> Result<Vec<Ticket>>;

    /// Cheap reachability check
    async fn ping(&self) -> Result<()>;

    /// Short backend name for health output
    fn backend_name(&self) -> &'static str;
}
