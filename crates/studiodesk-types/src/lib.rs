pub mod taxonomy;
pub mod ticket;
pub mod draft;
pub mod transcript;

pub use taxonomy::{Category, PriorityInfo, Studio, StatusInfo};
pub use ticket::{Priority, Ticket, TicketNumber, TicketReceipt, TicketStatus, UnknownValue, CHAT_SOURCE};
pub use draft::{ExtractionEnvelope, TicketDraft};
pub use transcript::{ConversationTurn, Role, Transcript, WELCOME_MESSAGE, WELCOME_TURN_ID};
