//! Sale actor: finalized transactions, recorded directly or from delivered orders.

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{CustomerClient, ProductClient, SaleClient};
use crate::domain::Sale;

pub fn new(
    buffer_size: usize,
    customers: CustomerClient,
    products: ProductClient,
) -> (ResourceActor<Sale>, SaleClient) {
    let (actor, generic_client) = ResourceActor::new("sales", buffer_size, sequential_ids());
    (actor, SaleClient::new(generic_client, customers, products))
}
