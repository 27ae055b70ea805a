//! Session table. The actor allocates a fresh random token as the id of every session.

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::ResourceActor;
use crate::auth::generate_token;
use crate::clients::SessionClient;
use crate::domain::Session;

pub fn new(buffer_size: usize) -> (ResourceActor<Session>, SessionClient) {
    let (actor, generic_client) = ResourceActor::new("sessions", buffer_size, generate_token);
    (actor, SessionClient::new(generic_client))
}
