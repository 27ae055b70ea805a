//! JSON request bodies that fail to decode are answered like any other invalid input.

use crate::app_system::StoreError;
use crate::domain::FieldErrors;
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejection is a 422 keyed `body` instead of axum's plain-text answer.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = StoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(StoreError::Validation(FieldErrors::single("body", rejection.body_text()))),
        }
    }
}
