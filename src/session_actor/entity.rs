use super::error::SessionError;
use crate::actor_framework::Entity;
use crate::domain::{Session, SessionCreate};
use chrono::Utc;

impl Entity for Session {
    type Id = String;
    type CreateParams = SessionCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Error = SessionError;

    fn id(&self) -> &String {
        &self.token
    }

    fn from_create_params(token: String, params: SessionCreate) -> Result<Self, SessionError> {
        Ok(Self {
            token,
            identity: params.identity,
            created_at: Utc::now(),
        })
    }

    /// The token is a credential.
    fn log_id(&self) -> Option<String> {
        None
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), SessionError> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), SessionError> {
        Ok(())
    }
}
