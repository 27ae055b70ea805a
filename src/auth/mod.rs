//! Credential checks and session tokens.
//!
//! The caller's identity is resolved here once per request and then passed explicitly to
//! every service call.

mod password;

pub use password::*;

use crate::administrator_actor::AdministratorError;
use crate::clients::{AdministratorClient, CustomerClient, SessionClient};
use crate::customer_actor::CustomerError;
use crate::domain::{Administrator, Customer, Identity, RecordStatus};
use crate::session_actor::SessionError;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("invalid nickname or password")]
    InvalidCredentials,
    #[error("authentication token missing")]
    MissingToken,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("already authenticated")]
    AlreadyAuthenticated,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound => AuthError::InvalidToken,
            other => AuthError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<CustomerError> for AuthError {
    fn from(err: CustomerError) -> Self {
        AuthError::ActorCommunicationError(err.to_string())
    }
}

impl From<AdministratorError> for AuthError {
    fn from(err: AdministratorError) -> Self {
        AuthError::ActorCommunicationError(err.to_string())
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub nickname: String,
    pub password: String,
}

/// Issues and resolves session tokens for customers and administrators.
#[derive(Clone)]
pub struct Authenticator {
    customers: CustomerClient,
    administrators: AdministratorClient,
    sessions: SessionClient,
}

impl Authenticator {
    pub fn new(customers: CustomerClient, administrators: AdministratorClient, sessions: SessionClient) -> Self {
        Self {
            customers,
            administrators,
            sessions,
        }
    }

    /// Returns a fresh token for the customer owning these credentials.
    #[instrument(skip_all, fields(nickname = %credentials.nickname))]
    pub async fn login_customer(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let customer = self
            .customers
            .find_by_nickname(&credentials.nickname)
            .await?
            .filter(|c| c.status == RecordStatus::Active && c.password_hash.verify(&credentials.password))
            .ok_or_else(|| {
                warn!("Customer login rejected");
                AuthError::InvalidCredentials
            })?;

        let session = self.sessions.open_session(Identity::Customer(customer.id)).await?;
        info!(customer_id = customer.id, "Customer logged in");
        Ok(session.token)
    }

    #[instrument(skip_all, fields(nickname = %credentials.nickname))]
    pub async fn login_administrator(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let administrator = self
            .administrators
            .find_by_nickname(&credentials.nickname)
            .await?
            .filter(|a| a.status == RecordStatus::Active && a.password_hash.verify(&credentials.password))
            .ok_or_else(|| {
                warn!("Administrator login rejected");
                AuthError::InvalidCredentials
            })?;

        let session = self
            .sessions
            .open_session(Identity::Administrator(administrator.id))
            .await?;
        info!(administrator_id = administrator.id, "Administrator logged in");
        Ok(session.token)
    }

    /// Resolves a token to the customer it was issued to. Administrator tokens are rejected.
    #[instrument(skip_all)]
    pub async fn authenticate_customer(&self, token: Option<&str>) -> Result<Customer, AuthError> {
        match self.identity_of(token).await? {
            Some(Identity::Customer(id)) => match self.customers.get_customer(id).await {
                Ok(customer) => Ok(customer),
                Err(CustomerError::NotFound(_)) => Err(AuthError::InvalidToken),
                Err(e) => Err(e.into()),
            },
            _ => Err(AuthError::InvalidToken),
        }
    }

    #[instrument(skip_all)]
    pub async fn authenticate_administrator(&self, token: Option<&str>) -> Result<Administrator, AuthError> {
        match self.identity_of(token).await? {
            Some(Identity::Administrator(id)) => match self.administrators.get_administrator(id).await {
                Ok(administrator) => Ok(administrator),
                Err(AdministratorError::NotFound(_)) => Err(AuthError::InvalidToken),
                Err(e) => Err(e.into()),
            },
            _ => Err(AuthError::InvalidToken),
        }
    }

    /// Guest guard for the customer login route.
    pub async fn ensure_customer_guest(&self, token: Option<&str>) -> Result<(), AuthError> {
        match self.identity_of(token).await {
            Ok(Some(Identity::Customer(_))) => Err(AuthError::AlreadyAuthenticated),
            Err(AuthError::ActorCommunicationError(e)) => Err(AuthError::ActorCommunicationError(e)),
            _ => Ok(()),
        }
    }

    /// Guest guard for the administrator login route.
    pub async fn ensure_administrator_guest(&self, token: Option<&str>) -> Result<(), AuthError> {
        match self.identity_of(token).await {
            Ok(Some(Identity::Administrator(_))) => Err(AuthError::AlreadyAuthenticated),
            Err(AuthError::ActorCommunicationError(e)) => Err(AuthError::ActorCommunicationError(e)),
            _ => Ok(()),
        }
    }

    #[instrument(skip_all)]
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.close_session(token).await?;
        Ok(())
    }

    async fn identity_of(&self, token: Option<&str>) -> Result<Option<Identity>, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;
        debug!("Resolving session");
        Ok(self.sessions.find_session(token).await?.map(|session| session.identity))
    }
}
