use thiserror::Error;

/// Error taxonomy for the booking service.
///
/// User-facing variants display as the bare message so the HTTP layer can
/// return them verbatim in `{ "error": ... }` bodies. `Conflict` is the
/// expected outcome of a lost reservation race and is never treated as an
/// application error.
#[derive(Error, Debug)]
pub enum CourtError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type CourtResult<T> = Result<T, CourtError>;
