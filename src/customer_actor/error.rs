use crate::domain::FieldErrors;
use thiserror::Error;

/// Errors that can occur during customer directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(String),
    #[error("Customer {0} has orders or sales")]
    InUse(String),
    #[error("Customer validation error: {0}")]
    Validation(FieldErrors),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(CustomerError);
