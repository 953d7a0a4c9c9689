pub mod error;
pub mod extraction;
pub mod gateway;
pub mod materializer;
pub mod prompts;
pub mod registry;
pub mod session;

pub use error::{FlowError, GatewayError, MaterializeError};
pub use extraction::{parse_reply, strip_json_blocks, AssistantReply};
pub use gateway::{
    AnalysisMode, AnalysisRequest, AnalysisResult, DegradedAnalysis, DegradedReason, Gateway,
    GatewayConfig, HistoryTurn, AnalysisObject,
};
pub use materializer::{draw_ticket_number, Materializer, MAX_NUMBER_ATTEMPTS};
pub use registry::{SessionRegistry, SharedSession};
pub use session::{ChatSession, Notification, SessionSnapshot, SessionState, TurnOutcome};
