use super::{AdministratorId, RecordStatus};
use crate::auth::PasswordHash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A back-office user allowed to manage the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Administrator {
    pub id: AdministratorId,
    pub status: RecordStatus,
    pub nickname: String,
    #[serde(skip)]
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAdministrator {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub nickname: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AdministratorCreate {
    pub nickname: String,
    pub password_hash: PasswordHash,
}
