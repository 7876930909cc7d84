use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("A record with id {0} already exists")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
