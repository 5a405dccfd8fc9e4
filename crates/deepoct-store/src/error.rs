use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {key}")]
    NotFound { key: String },

    #[error("record already exists: {key}")]
    AlreadyExists { key: String },

    #[error("store lock poisoned")]
    Poisoned,
}
