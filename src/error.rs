use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by [`crate::GameStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A "must exist" lookup found no matching game record.
    #[error("game not found: {0}")]
    NotFound(String),

    /// A new draft game could not be confirmed as persisted.
    #[error("could not confirm the new draft game was persisted")]
    DraftCreation,

    /// Any failure surfaced by the database driver.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Construct a `NotFound` error describing the missing record.
    pub fn not_found(what: impl Into<String>) -> Self {
        StoreError::NotFound(what.into())
    }
}
