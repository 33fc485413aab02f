use thiserror::Error;

pub type ItemResult<T> = Result<T, ItemError>;

#[derive(Debug, Error)]
pub enum ItemError {
    /// Raised by a listener callback; aborts the remaining delivery.
    #[error("listener failed: {0}")]
    Listener(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid item config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
