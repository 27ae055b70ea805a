//! Order desk: a small commerce backend built from tokio actors.
//!
//! Every record type lives in its own [`ResourceActor`](actor_framework::ResourceActor); the
//! typed clients in [`clients`] orchestrate use cases that span several actors, and
//! [`http`] exposes them over axum.

pub mod actor_framework;
pub mod app_system;
pub mod auth;
pub mod clients;
pub mod config;
pub mod domain;
pub mod http;

pub mod administrator_actor;
pub mod customer_actor;
pub mod order_actor;
pub mod product_actor;
pub mod sale_actor;
pub mod session_actor;

#[cfg(test)]
mod mock_framework;
