use super::{AdministratorId, CustomerId, LineInput, OrderId, RecordStatus, SaleId, SaleLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finalized transaction, recorded directly or as the outcome of a delivered order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub status: RecordStatus,
    pub customer_id: CustomerId,
    pub administrator_id: AdministratorId,
    /// Set when the sale materializes a delivered order.
    pub order_id: Option<OrderId>,
    pub lines: Vec<SaleLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSale {
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default)]
    pub products: Vec<LineInput>,
}

#[derive(Debug, Clone)]
pub struct SaleCreate {
    pub customer_id: CustomerId,
    pub administrator_id: AdministratorId,
    pub order_id: Option<OrderId>,
    pub lines: Vec<SaleLine>,
}
