use crate::domain::FieldErrors;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product ledger operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: Decimal, available: Decimal },
    #[error("Product {0} is referenced by orders or sales")]
    InUse(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(Decimal),
    #[error("Product validation error: {0}")]
    Validation(FieldErrors),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(ProductError);
