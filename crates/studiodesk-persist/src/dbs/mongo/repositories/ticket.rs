use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::dbs::mongo::models::MongoTicket;
use crate::error::{PersistError, Result};

const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoTicketRepository {
    collection: Collection<MongoTicket>,
}

impl MongoTicketRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("tickets");
        Self { collection }
    }

    /// Unique index on `ticketNumber`
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "ticketNumber": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Insert one ticket
    pub async fn insert(&self, ticket: &MongoTicket) -> Result<()> {
        match self.collection.insert_one(ticket).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(PersistError::DuplicateTicketNumber(
                ticket.ticket_number.to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Full-table read, insertion order
    pub async fn list_all(&self) -> Result<Vec<MongoTicket>> {
        let tickets = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(tickets)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        _ => false,
    }
}
