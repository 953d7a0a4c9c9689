pub mod models;
pub mod trait_client;
pub mod dbs;
pub mod error;
pub mod builder;

pub use models::{CategoryRecord, StudioRecord};
pub use trait_client::TicketStore;
pub use dbs::memory::InMemoryTicketStore;
pub use error::{PersistError, Result};
pub use builder::{StoreBackend, TicketStoreBuilder};

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoTicketStore;
