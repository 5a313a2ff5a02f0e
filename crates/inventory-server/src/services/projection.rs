//! Проекции сервера: полная и ограниченная (для обзора статусов).

use inventory_entities::servers::Model;
use serde::Serialize;

/// Полное представление сервера.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerView {
    pub id: i32,
    pub name: String,
    pub ip_address: String,
    pub description: String,
    pub server_is_active: bool,
}

/// Ограниченное представление: без id, имени и описания.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerStatus {
    pub ip_address: String,
    pub server_is_active: bool,
}

impl From<Model> for ServerView {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            ip_address: m.ip_address,
            description: m.description,
            server_is_active: m.server_is_active,
        }
    }
}

impl From<Model> for ServerStatus {
    fn from(m: Model) -> Self {
        Self {
            ip_address: m.ip_address,
            server_is_active: m.server_is_active,
        }
    }
}
