//! Error types for repository resource handling

use thiserror::Error;

/// Errors a closable repository resource can report
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("Close error: {0}")]
    Close(String),
}

impl RepoError {
    pub fn close(msg: impl Into<String>) -> Self {
        Self::Close(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RepoError>;
