// ABOUTME: Storage error taxonomy shared by all storage structs
// ABOUTME: Maps sqlx failures onto the cases callers act on

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Sqlx error: {0}")]
    Sqlx(sqlx::Error),

    /// No row matched. For todos this covers both "does not exist" and
    /// "owned by someone else" - callers must not be able to tell them apart.
    #[error("Record not found")]
    NotFound,

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Transient: pool acquisition timed out. Retried by the caller, never
    /// internally.
    #[error("Storage temporarily unavailable")]
    Unavailable,
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound,
            sqlx::Error::PoolTimedOut => StorageError::Unavailable,
            e => StorageError::Sqlx(e),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
