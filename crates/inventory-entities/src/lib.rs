//! Сущности базы данных реестра серверов.

pub mod servers;
