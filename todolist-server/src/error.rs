//! Error types for todolist-server

use thiserror::Error;

use crate::db::DbError;
use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a resolver operation
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Db(#[from] DbError),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Db(DbError::NotFound { .. }))
    }
}
