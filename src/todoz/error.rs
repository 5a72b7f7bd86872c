use crate::model::TodoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("There is already an empty todo; give it a title first")]
    DuplicateEmptyTitle,

    #[error("Todo title cannot be empty")]
    EmptyTitle,

    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    #[error("No todo ids left to assign")]
    IdSpaceExhausted,

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
