pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::AdministratorClient;
use crate::domain::Administrator;

/// Creates a new Administrator actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Administrator>, AdministratorClient) {
    let (actor, generic_client) = ResourceActor::new("administrators", buffer_size, sequential_ids());
    (actor, AdministratorClient::new(generic_client))
}
