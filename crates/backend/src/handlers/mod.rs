// Aggregate handlers
pub mod a001_machine;
pub mod a002_maintenance_schedule;

// Dashboard handlers
pub mod d001_maintenance_overview;

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::AggregateId;
use serde_json::json;

use crate::domain::error::ServiceError;

/// Ошибка HTTP-слоя: статус и сообщение `{"message": "..."}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) | ServiceError::InvalidDate(_) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(status = status.as_u16(), "{}", err);
        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

/// Тело запроса сломано или не совпадает с DTO (неизвестный статус,
/// нечисловой интервал, нет `Content-Type: application/json`)
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!(status = 400, "rejected request body: {}", message);
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

/// `Json`, который отвечает ошибкой в формате `ApiError`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Разбор ID из пути запроса
pub fn parse_id<I: AggregateId>(raw: &str) -> Result<I, ApiError> {
    I::from_string(raw).map_err(|message| ApiError {
        status: StatusCode::BAD_REQUEST,
        message,
    })
}
