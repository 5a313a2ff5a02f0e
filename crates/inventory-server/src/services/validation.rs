//! Валидация входных данных сервера: разбор JSON-объекта в типизированные поля.
//!
//! Ошибки собираются по всем полям сразу, чтобы клиент получил полный список.

use crate::services::defaults::FieldDefaults;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;

/// Тело запроса: JSON-объект с полями по имени.
pub type Payload = Map<String, Value>;

pub const NAME: &str = "name";
pub const IP_ADDRESS: &str = "ip_address";
pub const DESCRIPTION: &str = "description";
pub const SERVER_IS_ACTIVE: &str = "server_is_active";

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_DESCRIPTION_LEN: usize = 255;

const MSG_REQUIRED: &str = "Обязательное поле.";
const MSG_NULL: &str = "Поле не может быть null.";
const MSG_BLANK: &str = "Поле не может быть пустым.";
const MSG_NOT_STRING: &str = "Ожидается строка.";
const MSG_NOT_BOOL: &str = "Ожидается логическое значение.";
const MSG_NUL: &str = "Поле не может содержать нулевые символы.";
const MSG_INVALID_IP: &str = "Введите корректный IPv4 или IPv6 адрес.";

/// Ошибки валидации: имя поля → сообщения.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "некорректные поля: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Проверенный частичный набор полей (PATCH).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInput {
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub description: Option<String>,
    pub server_is_active: Option<bool>,
}

/// Полный набор полей без id (создание и PUT).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerFields {
    pub name: String,
    pub ip_address: String,
    pub description: String,
    pub server_is_active: bool,
}

impl ServerInput {
    /// Разобрать частичный ввод: проверяются только присланные поля.
    pub fn from_payload(payload: &Payload) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let input = Self::collect(payload, &mut errors);
        if errors.is_empty() {
            Ok(input)
        } else {
            Err(errors)
        }
    }

    /// Разобрать полный ввод: `name` обязателен, остальное берётся из дефолтов.
    pub fn complete(
        payload: &Payload,
        defaults: &FieldDefaults,
    ) -> Result<ServerFields, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let input = Self::collect(payload, &mut errors);

        if !payload.contains_key(NAME) {
            errors.add(NAME, MSG_REQUIRED);
        }

        match input.name {
            Some(name) if errors.is_empty() => Ok(ServerFields {
                name,
                ip_address: input
                    .ip_address
                    .unwrap_or_else(|| defaults.ip_address.clone()),
                description: input
                    .description
                    .unwrap_or_else(|| defaults.description.clone()),
                server_is_active: input.server_is_active.unwrap_or(defaults.server_is_active),
            }),
            _ => Err(errors),
        }
    }

    /// Проверить присланные поля; неизвестные ключи (в том числе `id`) игнорируются.
    fn collect(payload: &Payload, errors: &mut ValidationErrors) -> Self {
        let name = read_string(payload, NAME, errors)
            .and_then(|v| record(errors, NAME, check_text(&v, MAX_NAME_LEN)));
        let ip_address = read_string(payload, IP_ADDRESS, errors)
            .and_then(|v| record(errors, IP_ADDRESS, check_ip_address(&v)));
        let description = read_string(payload, DESCRIPTION, errors)
            .and_then(|v| record(errors, DESCRIPTION, check_text(&v, MAX_DESCRIPTION_LEN)));
        let server_is_active = read_bool(payload, SERVER_IS_ACTIVE, errors);

        Self {
            name,
            ip_address,
            description,
            server_is_active,
        }
    }
}

/// Строковое поле: обрезка пробелов по краям, запрет пустой строки и NUL, лимит длины в символах.
pub fn check_text(value: &str, max_len: usize) -> Result<String, String> {
    if value.contains('\0') {
        return Err(MSG_NUL.to_string());
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MSG_BLANK.to_string());
    }
    if trimmed.chars().count() > max_len {
        return Err(format!("Не более {max_len} символов."));
    }
    Ok(trimmed.to_string())
}

/// IPv4/IPv6 адрес. Возвращает каноническую запись (IPv6 в сжатом виде).
pub fn check_ip_address(value: &str) -> Result<String, String> {
    value
        .trim()
        .parse::<IpAddr>()
        .map(|ip| ip.to_string())
        .map_err(|_| MSG_INVALID_IP.to_string())
}

fn record(errors: &mut ValidationErrors, field: &str, result: Result<String, String>) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

fn read_string(payload: &Payload, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match payload.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => {
            errors.add(field, MSG_NULL);
            None
        }
        _ => {
            errors.add(field, MSG_NOT_STRING);
            None
        }
    }
}

fn read_bool(payload: &Payload, field: &str, errors: &mut ValidationErrors) -> Option<bool> {
    match payload.get(field)? {
        Value::Bool(b) => Some(*b),
        Value::Null => {
            errors.add(field, MSG_NULL);
            None
        }
        _ => {
            errors.add(field, MSG_NOT_BOOL);
            None
        }
    }
}
