use studiodesk_persist::PersistError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Caller bug: nothing to analyze
    #[error("Content to analyze must not be empty")]
    EmptyContent,
}

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Message must not be empty")]
    EmptyInput,

    #[error("Session is busy with a previous message")]
    Busy,

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Turn did not complete: {0}")]
    Task(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("Could not allocate a unique ticket number after {0} attempts")]
    NumberExhausted(usize),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
