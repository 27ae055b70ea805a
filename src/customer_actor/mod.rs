//! Customer directory actor.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{CustomerClient, SessionClient};
use crate::domain::Customer;

/// Creates a new Customer actor and its client. Deleting a customer revokes its sessions.
pub fn new(buffer_size: usize, sessions: SessionClient) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new("customers", buffer_size, sequential_ids());
    (actor, CustomerClient::new(generic_client, sessions))
}
