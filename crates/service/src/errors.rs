use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{} not found: {}", entity, id)) }

    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    /// Foreign-key violations become `Conflict`; a missed update becomes `NotFound`.
    pub fn from_db(e: DbErr) -> Self {
        if let Some(SqlErr::ForeignKeyConstraintViolation(msg)) = e.sql_err() {
            return Self::Conflict(msg);
        }
        match e {
            DbErr::RecordNotUpdated => Self::NotFound("record not found".into()),
            other => Self::Db(other.to_string()),
        }
    }

    /// Reference to a row that is gone; the schema forbids it, so it is a storage fault.
    pub fn dangling(entity: &str, id: i32, target: &str, target_id: i32) -> Self {
        Self::Db(format!("{} {} references missing {} {}", entity, id, target, target_id))
    }
}
