use super::{CustomerId, RecordStatus};
use crate::auth::PasswordHash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A store customer. The password hash never leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub status: RecordStatus,
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub nickname: String,
    #[serde(skip)]
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Orders and sales recorded for this customer. A held customer cannot be deleted.
    #[serde(skip)]
    pub references: u64,
}

/// Registration request carrying the plain-text password.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub national_id: String,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub phone: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub nickname: String,
}

/// Change request carrying an optional new plain-text password.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CustomerUpdate {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub national_id: Option<String>,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub phone: Option<String>,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub nickname: Option<String>,
    pub status: Option<RecordStatus>,
}

/// Params handed to the customer actor; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub nickname: String,
    pub password_hash: PasswordHash,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub nickname: Option<String>,
    pub password_hash: Option<PasswordHash>,
    pub status: Option<RecordStatus>,
}
