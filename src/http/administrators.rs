use super::auth::{AuthAdministrator, Token};
use super::json::JsonBody;
use crate::app_system::{Services, StoreError};
use crate::auth::Credentials;
use crate::domain::Administrator;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// `POST /administrators/login`
pub async fn login(
    State(services): State<Services>,
    token: Token,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Json<Value>, StoreError> {
    services.auth.ensure_administrator_guest(token.as_deref()).await?;
    let token = services.auth.login_administrator(&credentials).await?;
    Ok(Json(json!({ "message": "administrator authenticated", "token": token })))
}

pub async fn profile(AuthAdministrator(administrator): AuthAdministrator) -> Json<Administrator> {
    Json(administrator)
}

pub async fn logout(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    token: Token,
) -> Result<Json<Value>, StoreError> {
    if let Some(token) = token.as_deref() {
        services.auth.logout(token).await?;
    }
    Ok(Json(json!({ "message": "administrator logged out" })))
}
