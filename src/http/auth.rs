//! Extractors resolving the `Authorization` header into an explicit identity.

use crate::app_system::{Services, StoreError};
use crate::domain::{Administrator, Customer};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The raw session token, if the request carried one. Accepts an optional `Bearer ` prefix.
pub struct Token(pub Option<String>);

impl Token {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Token {
    type Rejection = StoreError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.strip_prefix("Bearer ").unwrap_or(value).trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Ok(Token(token))
    }
}

/// A request made with a valid customer session.
pub struct AuthCustomer(pub Customer);

#[async_trait]
impl FromRequestParts<Services> for AuthCustomer {
    type Rejection = StoreError;

    async fn from_request_parts(parts: &mut Parts, services: &Services) -> Result<Self, Self::Rejection> {
        let Token(token) = Token::from_request_parts(parts, services).await?;
        let customer = services.auth.authenticate_customer(token.as_deref()).await?;
        Ok(AuthCustomer(customer))
    }
}

/// A request made with a valid administrator session.
pub struct AuthAdministrator(pub Administrator);

#[async_trait]
impl FromRequestParts<Services> for AuthAdministrator {
    type Rejection = StoreError;

    async fn from_request_parts(parts: &mut Parts, services: &Services) -> Result<Self, Self::Rejection> {
        let Token(token) = Token::from_request_parts(parts, services).await?;
        let administrator = services.auth.authenticate_administrator(token.as_deref()).await?;
        Ok(AuthAdministrator(administrator))
    }
}
