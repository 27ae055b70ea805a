use super::actions::CustomerAction;
use super::error::CustomerError;
use crate::actor_framework::Entity;
use crate::domain::{Customer, CustomerCreate, CustomerId, CustomerPatch, RecordStatus};
use chrono::Utc;

impl Entity for Customer {
    type Id = CustomerId;
    type CreateParams = CustomerCreate;
    type Patch = CustomerPatch;
    type Action = CustomerAction;
    type ActionResult = ();
    type Error = CustomerError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        Ok(Self {
            id,
            status: RecordStatus::Active,
            name: params.name,
            national_id: params.national_id,
            phone: params.phone,
            nickname: params.nickname,
            password_hash: params.password_hash,
            created_at: Utc::now(),
            updated_at: None,
            references: 0,
        })
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![
            ("national_id", self.national_id.clone()),
            ("phone", self.phone.clone()),
            ("nickname", self.nickname.clone()),
        ]
    }

    fn on_delete(&self) -> Result<(), CustomerError> {
        if self.references > 0 {
            return Err(CustomerError::InUse(self.id.to_string()));
        }
        Ok(())
    }

    fn on_update(&mut self, patch: CustomerPatch) -> Result<(), CustomerError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(national_id) = patch.national_id {
            self.national_id = national_id;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(nickname) = patch.nickname {
            self.nickname = nickname;
        }
        if let Some(password_hash) = patch.password_hash {
            self.password_hash = password_hash;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn handle_action(&mut self, action: CustomerAction) -> Result<(), CustomerError> {
        match action {
            CustomerAction::Hold => self.references += 1,
            CustomerAction::Release => self.references = self.references.saturating_sub(1),
        }
        Ok(())
    }
}
