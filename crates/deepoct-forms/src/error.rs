use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form slot: {0}")]
    UnknownSlot(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),
}
