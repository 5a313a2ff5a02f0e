//! Конфигурация сервиса реестра серверов.

use crate::services::defaults::FieldDefaults;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:8000")
    pub listen: String,

    /// URL подключения к БД (sqlite или postgres)
    pub db_url: String,

    /// Значения по умолчанию для необязательных полей сервера
    pub defaults: FieldDefaults,
}

impl ServerConfig {
    /// Проверить адрес прослушивания и таблицу дефолтов.
    pub fn validated(self) -> anyhow::Result<Self> {
        self.listen
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("Некорректный адрес прослушивания {}: {e}", self.listen))?;

        let defaults = self
            .defaults
            .validated()
            .map_err(|e| anyhow::anyhow!("Некорректные значения по умолчанию: {e}"))?;

        Ok(Self { defaults, ..self })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listen.parse()?)
    }
}
