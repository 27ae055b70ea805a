use crate::customer_actor::CustomerError;
use crate::domain::{FieldErrors, OrderId, OrderStatus};
use crate::product_actor::ProductError;
use crate::sale_actor::SaleError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order {id} is {status}, expected PENDING")]
    InvalidState { id: OrderId, status: OrderStatus },
    #[error("Order validation error: {0}")]
    Validation(FieldErrors),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(OrderError);

impl From<ProductError> for OrderError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(errors) => OrderError::Validation(errors),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<CustomerError> for OrderError {
    fn from(err: CustomerError) -> Self {
        OrderError::ActorCommunicationError(err.to_string())
    }
}

impl From<SaleError> for OrderError {
    fn from(err: SaleError) -> Self {
        OrderError::ActorCommunicationError(err.to_string())
    }
}
