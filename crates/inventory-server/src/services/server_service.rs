//! Сервис реестра серверов: список, создание, чтение, обновление, удаление.
//!
//! Единственный владелец записей таблицы servers. Каждая операция выполняется
//! одним запросом к БД либо в одной транзакции (обновление).

use crate::error::AppError;
use crate::services::defaults::FieldDefaults;
use crate::services::projection::{ServerStatus, ServerView};
use crate::services::validation::{Payload, ServerFields, ServerInput};
use inventory_entities::servers::{ActiveModel, Column, Entity as ServerEntity};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait,
    QueryOrder, TransactionTrait,
};

/// Режим обновления: полная замена (PUT) или слияние (PATCH).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Full,
    Partial,
}

/// Все серверы в полной проекции, по возрастанию id.
pub async fn list_servers(db: &DatabaseConnection) -> Result<Vec<ServerView>, AppError> {
    let servers = ServerEntity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(servers.into_iter().map(ServerView::from).collect())
}

/// Все серверы в ограниченной проекции (ip_address, server_is_active).
pub async fn list_server_statuses(
    db: &DatabaseConnection,
) -> Result<Vec<ServerStatus>, AppError> {
    let servers = ServerEntity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(servers.into_iter().map(ServerStatus::from).collect())
}

/// Создать сервер. Пропущенные поля получают значения из таблицы дефолтов.
pub async fn create_server(
    db: &DatabaseConnection,
    defaults: &FieldDefaults,
    payload: &Payload,
) -> Result<ServerView, AppError> {
    let fields = ServerInput::complete(payload, defaults)?;

    let created = ActiveModel {
        name: Set(fields.name),
        ip_address: Set(fields.ip_address),
        description: Set(fields.description),
        server_is_active: Set(fields.server_is_active),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(ServerView::from(created))
}

/// Получить сервер по id.
pub async fn get_server(db: &DatabaseConnection, id: i32) -> Result<ServerView, AppError> {
    ServerEntity::find_by_id(id)
        .one(db)
        .await?
        .map(ServerView::from)
        .ok_or_else(|| not_found(id))
}

/// Обновить сервер.
///
/// `Full`: `name` обязателен, пропущенные необязательные поля сбрасываются
/// в дефолты. `Partial`: меняются только присланные поля.
/// Поиск записи и запись изменений идут в одной транзакции; отсутствующий
/// id даёт `NotFound` раньше любых ошибок тела запроса, поэтому `payload`
/// передаётся неразобранным результатом.
pub async fn update_server(
    db: &DatabaseConnection,
    defaults: &FieldDefaults,
    id: i32,
    payload: Result<Payload, AppError>,
    mode: UpdateMode,
) -> Result<ServerView, AppError> {
    let txn = db.begin().await?;

    let record = ServerEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(id))?;
    let payload = payload?;

    let model: ActiveModel = match mode {
        UpdateMode::Full => {
            let fields = ServerInput::complete(&payload, defaults)?;
            assign_fields(record.clone().into(), fields)
        }
        UpdateMode::Partial => {
            let input = ServerInput::from_payload(&payload)?;
            merge_input(record.clone().into(), input)
        }
    };

    let updated = if model.is_changed() {
        model.update(&txn).await?
    } else {
        record
    };
    txn.commit().await?;

    Ok(ServerView::from(updated))
}

/// Удалить сервер безвозвратно.
pub async fn delete_server(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let result = ServerEntity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(id));
    }
    Ok(())
}

fn assign_fields(mut model: ActiveModel, fields: ServerFields) -> ActiveModel {
    model.name = Set(fields.name);
    model.ip_address = Set(fields.ip_address);
    model.description = Set(fields.description);
    model.server_is_active = Set(fields.server_is_active);
    model
}

fn merge_input(mut model: ActiveModel, input: ServerInput) -> ActiveModel {
    if let Some(name) = input.name {
        model.name = Set(name);
    }
    if let Some(ip_address) = input.ip_address {
        model.ip_address = Set(ip_address);
    }
    if let Some(description) = input.description {
        model.description = Set(description);
    }
    if let Some(active) = input.server_is_active {
        model.server_is_active = Set(active);
    }
    model
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Сервер {id} не найден"))
}
