use super::auth::AuthAdministrator;
use super::json::JsonBody;
use crate::app_system::{Services, StoreError};
use crate::domain::{FieldErrors, Product, ProductCreate, ProductId, ProductPatch};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct StockRequest {
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl StockRequest {
    fn amount(&self) -> Result<Decimal, StoreError> {
        self.amount
            .ok_or_else(|| StoreError::Validation(FieldErrors::single("amount", "is required")))
    }
}

/// An empty catalog answers 404.
pub async fn list(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
) -> Result<Json<Vec<Product>>, StoreError> {
    let products = services.products.list_products().await?;
    if products.is_empty() {
        return Err(StoreError::NotFound("no products found".to_string()));
    }
    Ok(Json(products))
}

pub async fn create(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    JsonBody(params): JsonBody<ProductCreate>,
) -> Result<(StatusCode, Json<Product>), StoreError> {
    let product = services.products.create_product(params).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn show(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, StoreError> {
    Ok(Json(services.products.get_product(id).await?))
}

pub async fn update(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<ProductId>,
    JsonBody(patch): JsonBody<ProductPatch>,
) -> Result<Json<Product>, StoreError> {
    Ok(Json(services.products.update_product(id, patch).await?))
}

pub async fn delete(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>, StoreError> {
    services.products.delete_product(id).await?;
    Ok(Json(json!({ "message": "product deleted" })))
}

pub async fn add_stock(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<ProductId>,
    JsonBody(request): JsonBody<StockRequest>,
) -> Result<Json<Value>, StoreError> {
    let product = services.products.add_stock(id, request.amount()?).await?;
    Ok(Json(json!({ "message": "stock added", "product": product })))
}

pub async fn remove_stock(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<ProductId>,
    JsonBody(request): JsonBody<StockRequest>,
) -> Result<Json<Value>, StoreError> {
    let product = services.products.remove_stock(id, request.amount()?).await?;
    Ok(Json(json!({ "message": "stock removed", "product": product })))
}
