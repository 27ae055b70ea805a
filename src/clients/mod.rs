//! Typed client handles. Each wraps a [`ResourceClient`](crate::actor_framework::ResourceClient)
//! and, where a use case spans several actors, the clients it orchestrates.

#[macro_use]
mod macros;

mod administrator_client;
mod customer_client;
mod order_client;
mod product_client;
mod sale_client;
mod session_client;

pub use administrator_client::*;
pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
pub use sale_client::*;
pub use session_client::*;
