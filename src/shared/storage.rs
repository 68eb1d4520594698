// src/shared/storage.rs
//
// Tagged storage error emitted by every repository adapter. Classification is
// structural (SqlErr / DbErr variants), never based on message substrings.

use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use tracing::error;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("record not found")]
    NotFound,

    #[error("duplicate resource")]
    Conflict,

    #[error("storage timeout")]
    Timeout,

    #[error("storage error: {0}")]
    Unknown(String),
}

/// Classify a SeaORM error into the tagged taxonomy.
///
/// The originating operation name (`findAll`, `create`, ...) is logged here,
/// exactly once, together with the full driver detail. Neither ever reaches
/// the response body.
pub fn map_db_err(operation: &'static str, err: DbErr) -> StorageError {
    if let Some(sql_err) = err.sql_err() {
        match sql_err {
            SqlErr::UniqueConstraintViolation(detail) => {
                error!(operation, %detail, "unique constraint violated");
                return StorageError::Conflict;
            }
            SqlErr::ForeignKeyConstraintViolation(detail) => {
                error!(operation, %detail, "foreign key constraint violated");
                return StorageError::Conflict;
            }
            _ => {}
        }
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            error!(operation, "no matching row");
            StorageError::NotFound
        }
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
            error!(operation, "connection acquire timed out");
            StorageError::Timeout
        }
        other => {
            error!(operation, detail = %other, "storage operation failed");
            StorageError::Unknown(other.to_string())
        }
    }
}
