use super::actions::OrderAction;
use super::error::OrderError;
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId, OrderStatus};
use chrono::Utc;

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Patch = (); // Orders change only through actions
    type Action = OrderAction;
    type ActionResult = Order;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Stores an order whose lines have already been reserved in the product ledger.
    ///
    /// # Notes
    /// The order starts PENDING with no sale attached.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            status: OrderStatus::Pending,
            customer_id: params.customer_id,
            administrator_id: params.administrator_id,
            address: params.address,
            charged_amount: params.charged_amount,
            delivered_at: None,
            sale_id: None,
            lines: params.lines,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<Order, OrderError> {
        match action {
            OrderAction::MarkDelivered { sale_id, at } => {
                if self.status != OrderStatus::Pending {
                    return Err(OrderError::InvalidState { id: self.id, status: self.status });
                }
                self.status = OrderStatus::Delivered;
                self.delivered_at = Some(at);
                self.sale_id = Some(sale_id);
                self.updated_at = Some(at);
                Ok(self.clone())
            }
        }
    }
}
