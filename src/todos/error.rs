//! Typed failures surfaced by the to-do handler.
//!
//! Two kinds are part of the contract: malformed input and a missing item.
//! Anything the storage layer reports lands in `Db` and is surfaced as an
//! opaque internal status; the cause goes to the log, not the caller.

use std::fmt;

use sea_orm::DbErr;
use tonic::Status;

/// Errors returned by the to-do operations.
#[derive(Debug)]
pub enum TodoError {
    /// Malformed input: empty required field or non-positive id.
    /// Detected before touching storage.
    InvalidArgument(String),

    /// No item with this id exists.
    NotFound(i32),

    /// Unclassified storage failure.
    Db(DbErr),
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            TodoError::NotFound(id) => write!(f, "no to-do item with id {id}"),
            TodoError::Db(err) => write!(f, "database error: {err}"),
        }
    }
}

impl std::error::Error for TodoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TodoError::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for TodoError {
    fn from(err: DbErr) -> Self {
        TodoError::Db(err)
    }
}

impl From<TodoError> for Status {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::InvalidArgument(msg) => Status::invalid_argument(msg),
            TodoError::NotFound(id) => Status::not_found(format!("no to-do item with id {id}")),
            TodoError::Db(err) => {
                tracing::error!(error = %err, "database error");
                Status::internal("database error")
            }
        }
    }
}
