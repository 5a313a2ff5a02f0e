//! Таблица значений по умолчанию для необязательных полей сервера.
//!
//! Единственный источник дефолтов: их применяют и создание, и полное
//! обновление (PUT) для пропущенных полей.

use crate::services::validation::{self, ValidationErrors, DESCRIPTION, IP_ADDRESS};

pub const DEFAULT_IP_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_DESCRIPTION: &str = "no_description";
pub const DEFAULT_SERVER_IS_ACTIVE: bool = false;

/// Значения, подставляемые вместо отсутствующих полей.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefaults {
    pub ip_address: String,
    pub description: String,
    pub server_is_active: bool,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            ip_address: DEFAULT_IP_ADDRESS.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            server_is_active: DEFAULT_SERVER_IS_ACTIVE,
        }
    }
}

impl FieldDefaults {
    /// Проверить дефолты теми же правилами, что и пользовательский ввод.
    /// Возвращает таблицу с нормализованным IP.
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let ip_address = validation::check_ip_address(&self.ip_address)
            .map_err(|e| errors.add(IP_ADDRESS, e))
            .ok();
        let description = validation::check_text(&self.description, validation::MAX_DESCRIPTION_LEN)
            .map_err(|e| errors.add(DESCRIPTION, e))
            .ok();

        match (ip_address, description) {
            (Some(ip_address), Some(description)) => Ok(Self {
                ip_address,
                description,
                server_is_active: self.server_is_active,
            }),
            _ => Err(errors),
        }
    }
}
