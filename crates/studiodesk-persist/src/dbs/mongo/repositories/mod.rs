pub mod reference;
pub mod ticket;

pub use reference::MongoReferenceRepository;
pub use ticket::MongoTicketRepository;
