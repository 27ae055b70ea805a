use super::{AdministratorId, CustomerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a session token speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "id", rename_all = "lowercase")]
pub enum Identity {
    Customer(CustomerId),
    Administrator(AdministratorId),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Customer(id) => write!(f, "customer:{id}"),
            Identity::Administrator(id) => write!(f, "administrator:{id}"),
        }
    }
}

/// An opaque token mapped to one identity. Created at login, deleted at logout.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub identity: Identity,
}
