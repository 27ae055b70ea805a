use crate::domain::SaleId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Moves a PENDING order to DELIVERED, linking the sale that fulfilled it.
    MarkDelivered { sale_id: SaleId, at: DateTime<Utc> },
}
