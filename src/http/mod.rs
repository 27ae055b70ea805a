//! HTTP surface.
//!
//! ## Routes
//!
//! - `GET /health`
//! - `/customers/{login,profile,logout}` for customers themselves
//! - `/administrators/{login,profile,logout}` and everything under `/administrators/` for
//!   store management. These need an administrator token in `Authorization`.

mod administrators;
mod auth;
mod customers;
mod error;
mod json;
mod orders;
mod products;
mod sales;

pub use auth::{AuthAdministrator, AuthCustomer, Token};
pub use json::JsonBody;

use crate::app_system::Services;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::future::Future;
use tower_http::trace::TraceLayer;

/// Build an axum `Router` serving every route against the given services.
pub fn router(services: Services) -> Router {
    let customer_routes = Router::new()
        .route("/login", post(customers::login))
        .route("/profile", get(customers::profile))
        .route("/logout", post(customers::logout));

    let administrator_routes = Router::new()
        .route("/login", post(administrators::login))
        .route("/profile", get(administrators::profile))
        .route("/logout", post(administrators::logout))
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/:id",
            get(customers::show).put(customers::update).delete(customers::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::show).put(products::update).delete(products::delete),
        )
        .route("/products/:id/stock/add", put(products::add_stock))
        .route("/products/:id/stock/remove", put(products::remove_stock))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id", get(orders::show))
        .route("/orders/:id/deliver", put(orders::deliver))
        .route("/sales", get(sales::list).post(sales::create))
        .route("/sales/:id", get(sales::show));

    Router::new()
        .route("/health", get(health))
        .nest("/customers", customer_routes)
        .nest("/administrators", administrator_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(services)
}

/// Serve the router on `listener` until `shutdown` resolves.
pub async fn serve(
    services: Services,
    listener: tokio::net::TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, router(services))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
