use crate::domain::FieldErrors;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdministratorError {
    #[error("Administrator not found: {0}")]
    NotFound(String),
    #[error("Administrator validation error: {0}")]
    Validation(FieldErrors),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(AdministratorError);
