use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Client;
use studiodesk_types::Ticket;

use crate::dbs::mongo::models::MongoTicket;
use crate::dbs::mongo::repositories::{MongoReferenceRepository, MongoTicketRepository};
use crate::error::{PersistError, Result};
use crate::models::{CategoryRecord, StudioRecord};
use crate::trait_client::TicketStore;

pub struct MongoTicketStore {
    client: Client,
    database: String,
    ticket_repo: MongoTicketRepository,
    reference_repo: MongoReferenceRepository,
}

impl MongoTicketStore {
    /// Connect to MongoDB and make sure the ticket-number index exists
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let ticket_repo = MongoTicketRepository::new(&client, database);
        let reference_repo = MongoReferenceRepository::new(&client, database);

        ticket_repo.ensure_indexes().await?;

        Ok(Self {
            client,
            database: database.to_string(),
            ticket_repo,
            reference_repo,
        })
    }

    pub async fn seed_reference_data(&self) -> Result<()> {
        self.reference_repo.seed_if_empty().await
    }
}

#[async_trait]
impl TicketStore for MongoTicketStore {
    async fn insert_ticket(&self, ticket: Ticket) -> Result<Ticket> {
        let mongo_ticket: MongoTicket = ticket.into();
        self.ticket_repo.insert(&mongo_ticket).await?;
        Ok(mongo_ticket.into())
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<CategoryRecord>> {
        self.reference_repo.find_category_by_name(name).await
    }

    async fn first_studio(&self) -> Result<Option<StudioRecord>> {
        self.reference_repo.first_studio().await
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let tickets = self.ticket_repo.list_all().await?;
        Ok(tickets.into_iter().map(Ticket::from).collect())
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
