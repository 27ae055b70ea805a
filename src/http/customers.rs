use super::auth::{AuthAdministrator, AuthCustomer, Token};
use super::json::JsonBody;
use crate::app_system::{Services, StoreError};
use crate::auth::Credentials;
use crate::domain::{Customer, CustomerId, CustomerUpdate, NewCustomer};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

// --- Customer session ---

/// `POST /customers/login`
pub async fn login(
    State(services): State<Services>,
    token: Token,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Json<Value>, StoreError> {
    services.auth.ensure_customer_guest(token.as_deref()).await?;
    let token = services.auth.login_customer(&credentials).await?;
    Ok(Json(json!({ "message": "customer authenticated", "token": token })))
}

/// `GET /customers/profile`
pub async fn profile(AuthCustomer(customer): AuthCustomer) -> Json<Customer> {
    Json(customer)
}

/// `POST /customers/logout`
pub async fn logout(
    State(services): State<Services>,
    AuthCustomer(_): AuthCustomer,
    token: Token,
) -> Result<Json<Value>, StoreError> {
    if let Some(token) = token.as_deref() {
        services.auth.logout(token).await?;
    }
    Ok(Json(json!({ "message": "customer logged out" })))
}

// --- Administration ---

pub async fn list(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
) -> Result<Json<Vec<Customer>>, StoreError> {
    Ok(Json(services.customers.list_customers().await?))
}

pub async fn create(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    JsonBody(new): JsonBody<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>), StoreError> {
    let customer = services.customers.register_customer(new).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn show(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>, StoreError> {
    Ok(Json(services.customers.get_customer(id).await?))
}

pub async fn update(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<CustomerId>,
    JsonBody(update): JsonBody<CustomerUpdate>,
) -> Result<Json<Customer>, StoreError> {
    Ok(Json(services.customers.update_customer(id, update).await?))
}

pub async fn delete(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<CustomerId>,
) -> Result<Json<Value>, StoreError> {
    services.customers.delete_customer(id).await?;
    Ok(Json(json!({ "message": "customer deleted" })))
}
