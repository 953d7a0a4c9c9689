use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dbs::memory::InMemoryTicketStore;
use crate::error::{PersistError, Result};
use crate::trait_client::TicketStore;

/// Which storage backend to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    #[serde(rename = "mongodb")]
    MongoDb,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::MongoDb => write!(f, "mongodb"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = PersistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            other => Err(PersistError::Config(format!("Unknown store backend: {}", other))),
        }
    }
}

pub struct TicketStoreBuilder {
    backend: StoreBackend,
    mongodb_uri: Option<String>,
    database: Option<String>,
    seed_reference_data: bool,
}

impl TicketStoreBuilder {
    pub fn new() -> Self {
        Self {
            backend: StoreBackend::Memory,
            mongodb_uri: None,
            database: None,
            seed_reference_data: true,
        }
    }

    pub fn backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn mongodb_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self
    }

    pub fn database(mut self, db: impl Into<String>) -> Self {
        self.database = Some(db.into());
        self
    }

    /// Copy taxonomy categories and studios into empty reference tables
    pub fn seed_reference_data(mut self, seed: bool) -> Self {
        self.seed_reference_data = seed;
        self
    }

    pub async fn build(self) -> Result<Arc<dyn TicketStore>> {
        match self.backend {
            StoreBackend::Memory => {
                let store = if self.seed_reference_data {
                    InMemoryTicketStore::seeded()
                } else {
                    InMemoryTicketStore::new()
                };
                tracing::info!(backend = "memory", "Ticket store ready");
                Ok(Arc::new(store))
            }
            StoreBackend::MongoDb => self.build_mongo().await,
        }
    }

    #[cfg(feature = "mongodb")]
    async fn build_mongo(self) -> Result<Arc<dyn TicketStore>> {
        let mongodb_uri = self
            .mongodb_uri
            .ok_or_else(|| PersistError::Config("mongodb_uri is required".to_string()))?;
        let database = self
            .database
            .ok_or_else(|| PersistError::Config("database is required".to_string()))?;

        let store = crate::dbs::mongo::MongoTicketStore::connect(&mongodb_uri, &database).await?;
        if self.seed_reference_data {
            store.seed_reference_data().await?;
        }

        tracing::info!(backend = "mongodb", database = %database, "Ticket store ready");
        Ok(Arc::new(store))
    }

    #[cfg(not(feature = "mongodb"))]
    async fn build_mongo(self) -> Result<Arc<dyn TicketStore>> {
        Err(PersistError::Config(
            "mongodb backend requested but the `mongodb` feature is disabled".to_string(),
        ))
    }
}

impl Default for TicketStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
