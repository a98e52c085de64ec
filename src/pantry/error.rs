use crate::model::CollectionName;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("No such item: {id} in {collection}")]
    NotFound { collection: CollectionName, id: u64 },

    #[error("Invalid collection name: {0}")]
    InvalidCollection(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: String, value: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PantryError>;
