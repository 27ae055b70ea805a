use crate::administrator_actor::AdministratorError;
use crate::auth::AuthError;
use crate::customer_actor::CustomerError;
use crate::domain::FieldErrors;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::sale_actor::SaleError;
use crate::session_actor::SessionError;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use thiserror::Error;

/// Crate-level error every component error converts into.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidState(String),
    #[error("not enough stock: requested {requested}, current stock {available}")]
    InsufficientStock { requested: Decimal, available: Decimal },
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            StoreError::BadRequest(_) | StoreError::InvalidState(_) | StoreError::InsufficientStock { .. } => {
                StatusCode::BAD_REQUEST
            }
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProductError> for StoreError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => StoreError::NotFound(format!("product {id} not found")),
            err @ ProductError::InUse(_) => StoreError::BadRequest(err.to_string()),
            ProductError::InsufficientStock { requested, available } => {
                StoreError::InsufficientStock { requested, available }
            }
            ProductError::InvalidQuantity(_) => {
                StoreError::Validation(FieldErrors::single("amount", "must be greater than 0"))
            }
            ProductError::Validation(errors) => StoreError::Validation(errors),
            ProductError::ActorCommunicationError(e) => StoreError::Storage(e),
        }
    }
}

impl From<OrderError> for StoreError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => StoreError::NotFound(format!("order {id} not found")),
            err @ OrderError::InvalidState { .. } => StoreError::InvalidState(err.to_string()),
            OrderError::Validation(errors) => StoreError::Validation(errors),
            OrderError::ActorCommunicationError(e) => StoreError::Storage(e),
        }
    }
}

impl From<SaleError> for StoreError {
    fn from(err: SaleError) -> Self {
        match err {
            SaleError::NotFound(id) => StoreError::NotFound(format!("sale {id} not found")),
            SaleError::Validation(errors) => StoreError::Validation(errors),
            SaleError::ActorCommunicationError(e) => StoreError::Storage(e),
        }
    }
}

impl From<CustomerError> for StoreError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(id) => StoreError::NotFound(format!("customer {id} not found")),
            err @ CustomerError::InUse(_) => StoreError::BadRequest(err.to_string()),
            CustomerError::Validation(errors) => StoreError::Validation(errors),
            CustomerError::ActorCommunicationError(e) => StoreError::Storage(e),
        }
    }
}

impl From<AdministratorError> for StoreError {
    fn from(err: AdministratorError) -> Self {
        match err {
            AdministratorError::NotFound(id) => StoreError::NotFound(format!("administrator {id} not found")),
            AdministratorError::Validation(errors) => StoreError::Validation(errors),
            AdministratorError::ActorCommunicationError(e) => StoreError::Storage(e),
        }
    }
}

impl From<SessionError> for StoreError {
    fn from(err: SessionError) -> Self {
        AuthError::from(err).into()
    }
}

impl From<AuthError> for StoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AlreadyAuthenticated => StoreError::BadRequest(err.to_string()),
            AuthError::ActorCommunicationError(e) => StoreError::Storage(e),
            other => StoreError::Unauthorized(other.to_string()),
        }
    }
}
