use super::{AdministratorId, CustomerId, LineInput, OrderId, OrderLine, SaleId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// PENDING on creation, DELIVERED once fulfilled. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("PENDING"),
            OrderStatus::Delivered => f.write_str("DELIVERED"),
        }
    }
}

/// A customer's request for products. Stock for its lines is reserved while it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub customer_id: CustomerId,
    /// Administrator who took the order.
    pub administrator_id: AdministratorId,
    pub address: String,
    pub charged_amount: Decimal,
    pub delivered_at: Option<DateTime<Utc>>,
    /// Sale created when the order was delivered.
    pub sale_id: Option<SaleId>,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Order request as submitted by an administrator. Missing fields are reported alongside
/// every other problem instead of failing the decode.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewOrder {
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default)]
    pub charged_amount: Option<Decimal>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub address: Option<String>,
    #[serde(default)]
    pub products: Vec<LineInput>,
}

/// Params handed to the order actor once stock has been reserved.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub administrator_id: AdministratorId,
    pub address: String,
    pub charged_amount: Decimal,
    pub lines: Vec<OrderLine>,
}
