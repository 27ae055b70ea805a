use crate::customer_actor::CustomerError;
use crate::domain::FieldErrors;
use crate::product_actor::ProductError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    #[error("Sale not found: {0}")]
    NotFound(String),
    #[error("Sale validation error: {0}")]
    Validation(FieldErrors),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(SaleError);

impl From<ProductError> for SaleError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(errors) => SaleError::Validation(errors),
            other => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<CustomerError> for SaleError {
    fn from(err: CustomerError) -> Self {
        SaleError::ActorCommunicationError(err.to_string())
    }
}
