//! Order actor. Creation and delivery are orchestrated by [`OrderClient`], which talks to
//! the product ledger and the sale service before touching this actor.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{CustomerClient, OrderClient, ProductClient, SaleClient};
use crate::domain::Order;

pub fn new(
    buffer_size: usize,
    customers: CustomerClient,
    products: ProductClient,
    sales: SaleClient,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new("orders", buffer_size, sequential_ids());
    (actor, OrderClient::new(generic_client, customers, products, sales))
}
