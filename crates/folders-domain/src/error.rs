use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid request")]
    InvalidRequest,

    #[error("Invalid organization ID: {0}")]
    InvalidOrganizationId(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid cursor")]
    InvalidCursor,

    #[error("Provider error: {0}")]
    ProviderError(#[from] anyhow::Error),
}
