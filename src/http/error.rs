use crate::app_system::StoreError;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            StoreError::Validation(errors) => json!({ "message": "validation failed", "errors": errors }),
            StoreError::InsufficientStock { available, .. } => {
                json!({ "message": "not enough stock to remove", "current_stock": available })
            }
            StoreError::Storage(error) => json!({ "message": "storage error", "error": error }),
            other => json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
