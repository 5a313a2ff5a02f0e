//! Типы ошибок сервиса реестра серверов.

use crate::services::validation::ValidationErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Ошибка валидации: {0}")]
    Validation(ValidationErrors),

    #[error("Не найдено: {0}")]
    NotFound(String),

    #[error("Неверный запрос: {0}")]
    BadRequest(String),

    #[error("Ошибка хранилища: {0}")]
    Store(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "Ошибка валидации",
                    "fields": errors,
                })),
            )
                .into_response(),
            AppError::NotFound(m) => error_body(StatusCode::NOT_FOUND, m),
            AppError::BadRequest(m) => error_body(StatusCode::BAD_REQUEST, m),
            AppError::Store(m) => {
                tracing::error!("Ошибка хранилища: {m}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, m)
            }
        }
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e)
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::Store(e.to_string())
    }
}
