use super::error::AdministratorError;
use crate::actor_framework::Entity;
use crate::domain::{Administrator, AdministratorCreate, AdministratorId, RecordStatus};
use chrono::Utc;

impl Entity for Administrator {
    type Id = AdministratorId;
    type CreateParams = AdministratorCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Error = AdministratorError;

    fn id(&self) -> &AdministratorId {
        &self.id
    }

    fn from_create_params(id: AdministratorId, params: AdministratorCreate) -> Result<Self, AdministratorError> {
        Ok(Self {
            id,
            status: RecordStatus::Active,
            nickname: params.nickname,
            password_hash: params.password_hash,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("nickname", self.nickname.clone())]
    }

    /// Administrators are not editable.
    fn on_update(&mut self, _patch: ()) -> Result<(), AdministratorError> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), AdministratorError> {
        Ok(())
    }
}
