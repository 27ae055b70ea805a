//! Product ledger: catalog entries and their stock, managed by a [`ResourceActor`].

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::ProductClient;
use crate::domain::Product;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new("products", buffer_size, sequential_ids());
    (actor, ProductClient::new(generic_client))
}
