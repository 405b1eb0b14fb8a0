//! Разбор полей форм, общих для нескольких агрегатов

use chrono::NaiveDate;
use contracts::shared::maintenance::parse_iso_date;

use super::error::ServiceError;

/// Обязательная дата `YYYY-MM-DD`: пустое значение это ошибка валидации,
/// неразборчивое это ошибка формата даты
pub fn required_date(raw: &str, field: &str) -> Result<NaiveDate, ServiceError> {
    if raw.trim().is_empty() {
        return Err(ServiceError::validation(format!("{field} is required")));
    }
    Ok(parse_iso_date(raw)?)
}

pub fn interval_days(raw: i64) -> Result<u32, ServiceError> {
    if raw < 1 {
        return Err(ServiceError::validation(
            "maintenanceIntervalDays must be at least 1",
        ));
    }
    u32::try_from(raw)
        .map_err(|_| ServiceError::validation("maintenanceIntervalDays is too large"))
}

/// Обязательный текст, хранится без крайних пробелов
pub fn required_text(raw: &str, field: &str) -> Result<String, ServiceError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ServiceError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}
