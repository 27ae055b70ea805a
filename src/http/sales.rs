use super::auth::AuthAdministrator;
use super::json::JsonBody;
use crate::app_system::{Services, StoreError};
use crate::domain::{NewSale, Sale, SaleId};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
) -> Result<Json<Vec<Sale>>, StoreError> {
    Ok(Json(services.sales.list_sales().await?))
}

pub async fn create(
    State(services): State<Services>,
    AuthAdministrator(admin): AuthAdministrator,
    JsonBody(new): JsonBody<NewSale>,
) -> Result<(StatusCode, Json<Sale>), StoreError> {
    let sale = services.sales.create_sale(&admin, new).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

pub async fn show(
    State(services): State<Services>,
    AuthAdministrator(_): AuthAdministrator,
    Path(id): Path<SaleId>,
) -> Result<Json<Sale>, StoreError> {
    Ok(Json(services.sales.get_sale(id).await?))
}
