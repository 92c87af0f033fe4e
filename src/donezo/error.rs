use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonezoError {
    #[error("Task title cannot be empty")]
    InvalidTitle,

    #[error("Task with ID {0} not found")]
    NotFound(u64),

    #[error("Malformed task record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DonezoError>;
