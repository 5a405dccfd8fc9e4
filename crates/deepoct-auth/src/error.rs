use thiserror::Error;

use deepoct_store::error::StorageError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("malformed password hash")]
    MalformedHash,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}
