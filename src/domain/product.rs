use super::{ProductId, RecordStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Unit of measure a product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Units,
    Meters,
    Kilos,
    Liters,
}

/// A catalog entry together with its stock on hand.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::actor_framework::ResourceActor); see
/// [`ProductAction`](crate::product_actor::ProductAction) for the stock operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub sell_price: Decimal,
    pub base_price: Decimal,
    pub unit: Unit,
    /// Never negative.
    pub stock: Decimal,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Order and sale lines holding this product. A held product cannot be deleted.
    #[serde(skip)]
    pub references: u64,
}

/// Params for registering a product. New products start with no stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(max = 1200, message = "must be at most 1200 characters"))]
    #[serde(default)]
    pub description: Option<String>,
    pub sell_price: Decimal,
    pub base_price: Decimal,
    pub unit: Unit,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, sell_price: Decimal, base_price: Decimal, unit: Unit) -> Self {
        Self {
            name: name.into(),
            description: None,
            sell_price,
            base_price,
            unit,
        }
    }
}

/// Catalog fields that can be changed after registration. Stock moves only through actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductPatch {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 1200, message = "must be at most 1200 characters"))]
    pub description: Option<String>,
    pub sell_price: Option<Decimal>,
    pub base_price: Option<Decimal>,
    pub unit: Option<Unit>,
    pub status: Option<RecordStatus>,
}
