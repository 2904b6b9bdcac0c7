use thiserror::Error;

/// Faults surfaced by the store layer. `InvalidId` is a caller mistake;
/// `Driver` is an upstream store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid document id: {0}")]
    InvalidId(String),
    #[error("store operation failed: {0}")]
    Driver(#[from] mongodb::error::Error),
}
