//! Plain data records for the store. No actor or transport concerns live here.

pub mod administrator;
pub mod customer;
pub mod lines;
pub mod order;
pub mod product;
pub mod sale;
pub mod session;
pub mod validation;

pub use administrator::*;
pub use customer::*;
pub use lines::*;
pub use order::*;
pub use product::*;
pub use sale::*;
pub use session::*;
pub use validation::*;

use serde::{Deserialize, Serialize};

pub type CustomerId = u64;
pub type AdministratorId = u64;
pub type ProductId = u64;
pub type OrderId = u64;
pub type SaleId = u64;

/// Lifecycle flag shared by customers, administrators, products and sales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}
