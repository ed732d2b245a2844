//! Storage-specific error type wrapping sqlx errors.

use blogs_domain::error::BlogError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// `SQLite` handed back a row id that is not a valid blog post id.
    #[error("row id {0} is out of range")]
    RowIdOutOfRange(i64),
}

impl From<StorageError> for BlogError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
