use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Duplicate key {key} in {table}")]
    Duplicate { table: &'static str, key: String },
}
