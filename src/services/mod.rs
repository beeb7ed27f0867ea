//! Application services: validation, listing and contact workflows.

use thiserror::Error;

use crate::domain::validation::ValidationError;

pub mod contacts;
pub mod seed;
pub mod validation;

/// Errors surfaced by services to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted contact was rejected; re-render the form with the message.
    #[error(transparent)]
    Validation(ValidationError),

    #[error("contact not found")]
    NotFound,

    /// Persistence failed for a reason other than a conflict or a missing row.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
