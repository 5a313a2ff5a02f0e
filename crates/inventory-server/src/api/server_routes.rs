//! Маршруты серверов: список, создание, чтение, обновление, удаление, обзор статусов.

use crate::api::AppState;
use crate::error::AppError;
use crate::services::projection::{ServerStatus, ServerView};
use crate::services::server_service::{self, UpdateMode};
use crate::services::validation::Payload;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/servers/", get(list_servers))
        .route("/servers/add", post(create_server))
        .route("/servers/status", get(list_statuses))
        .route(
            "/servers/{id}",
            get(retrieve_server)
                .put(replace_server)
                .patch(merge_server)
                .delete(delete_server),
        )
}

// ── Обработчики ──────────────────────────────────────────────────────────────

/// GET /servers/ — все серверы.
async fn list_servers(State(state): State<AppState>) -> Result<Json<Vec<ServerView>>, AppError> {
    let servers = server_service::list_servers(&state.db).await?;
    Ok(Json(servers))
}

/// POST /servers/add — создать сервер.
async fn create_server(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ServerView>), AppError> {
    let payload = into_payload(body)?;
    let server = server_service::create_server(&state.db, &state.defaults, &payload).await?;
    tracing::info!("Сервер создан: {} ({})", server.id, server.name);

    Ok((StatusCode::CREATED, Json(server)))
}

/// GET /servers/status — обзор статусов без идентифицирующих полей.
async fn list_statuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServerStatus>>, AppError> {
    let statuses = server_service::list_server_statuses(&state.db).await?;
    Ok(Json(statuses))
}

/// GET /servers/{id}
async fn retrieve_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServerView>, AppError> {
    let id = parse_id(&id)?;
    let server = server_service::get_server(&state.db, id).await?;
    Ok(Json(server))
}

/// PUT /servers/{id} — полное обновление.
async fn replace_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ServerView>, AppError> {
    update(state, &id, body, UpdateMode::Full).await
}

/// PATCH /servers/{id} — частичное обновление.
async fn merge_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ServerView>, AppError> {
    update(state, &id, body, UpdateMode::Partial).await
}

/// DELETE /servers/{id}
async fn delete_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    server_service::delete_server(&state.db, id).await?;
    tracing::info!("Сервер удалён: {id}");

    Ok(StatusCode::NO_CONTENT)
}

async fn update(
    state: AppState,
    raw_id: &str,
    body: Result<Json<Value>, JsonRejection>,
    mode: UpdateMode,
) -> Result<Json<ServerView>, AppError> {
    let id = parse_id(raw_id)?;
    let server =
        server_service::update_server(&state.db, &state.defaults, id, into_payload(body), mode)
            .await?;
    tracing::info!("Сервер обновлён: {id} ({mode:?})");

    Ok(Json(server))
}

/// Id только из цифр; иное не может существовать в таблице: отвечаем 404.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(format!("Сервер {raw} не найден")));
    }
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Сервер {raw} не найден")))
}

/// Тело запроса должно быть JSON-объектом.
fn into_payload(body: Result<Json<Value>, JsonRejection>) -> Result<Payload, AppError> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(AppError::BadRequest("Ожидается JSON-объект".into())),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
