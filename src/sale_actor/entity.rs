use super::error::SaleError;
use crate::actor_framework::Entity;
use crate::domain::{RecordStatus, Sale, SaleCreate, SaleId};
use chrono::Utc;

impl Entity for Sale {
    type Id = SaleId;
    type CreateParams = SaleCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Error = SaleError;

    fn id(&self) -> &SaleId {
        &self.id
    }

    fn from_create_params(id: SaleId, params: SaleCreate) -> Result<Self, SaleError> {
        Ok(Self {
            id,
            status: RecordStatus::Active,
            customer_id: params.customer_id,
            administrator_id: params.administrator_id,
            order_id: params.order_id,
            lines: params.lines,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), SaleError> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), SaleError> {
        Ok(())
    }
}
