use crate::actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

// Tokens are secrets, so a missing session never echoes the token back.
impl From<FrameworkError<SessionError>> for SessionError {
    fn from(err: FrameworkError<SessionError>) -> Self {
        match err {
            FrameworkError::NotFound(_) => SessionError::NotFound,
            FrameworkError::Entity(e) => e,
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}
