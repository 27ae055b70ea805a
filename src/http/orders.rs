use super::auth::AuthAdministrator;
use super::json::JsonBody;
use crate::app_system::{Services, StoreError};
use crate::domain::{NewOrder, Order, OrderId};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

pub async fn list(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
) -> Result<Json<Vec<Order>>, StoreError> {
    Ok(Json(services.orders.list_orders().await?))
}

pub async fn create(
    State(services): State<Services>,
    AuthAdministrator(admin): AuthAdministrator,
    JsonBody(new): JsonBody<NewOrder>,
) -> Result<(StatusCode, Json<Order>), StoreError> {
    let order = services.orders.create_order(&admin, new).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn show(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, StoreError> {
    Ok(Json(services.orders.get_order(id).await?))
}

/// `PUT /administrators/orders/:id/deliver`
pub async fn deliver(
    State(services): State<Services>,
    AuthAdministrator(admin): AuthAdministrator,
    Path(id): Path<OrderId>,
) -> Result<Json<Value>, StoreError> {
    let order = services.orders.deliver_order(&admin, id).await?;
    Ok(Json(json!({ "message": "order delivered and sale created", "order": order })))
}
