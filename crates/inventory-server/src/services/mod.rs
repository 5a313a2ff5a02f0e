//! Бизнес-логика реестра серверов.

pub mod defaults;
pub mod projection;
pub mod server_service;
pub mod validation;
