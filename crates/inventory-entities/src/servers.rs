//! Entity для таблицы servers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servers")]
pub struct Model {
    /// Автоинкрементный первичный ключ, не переиспользуется после удаления
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Имя сервера (до 255 символов)
    pub name: String,

    /// IPv4 или IPv6 адрес в каноническом виде
    pub ip_address: String,

    /// Описание (до 255 символов)
    pub description: String,

    /// Активен ли сервер
    pub server_is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
