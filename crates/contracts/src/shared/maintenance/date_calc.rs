use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Формат дат на границе API: только дата, без времени и часового пояса
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Ошибки календарной арифметики
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    Malformed { input: String },

    #[error("{date} + {days} days is outside the supported calendar range")]
    OutOfRange { date: NaiveDate, days: u32 },
}

/// Разбор даты в формате `YYYY-MM-DD`
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).map_err(|_| DateError::Malformed {
        input: input.to_string(),
    })
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Дата следующего обслуживания: `last + interval_days` календарных дней.
///
/// Интервал не валидируется: отклонять значения `< 1` должен вызывающий код.
pub fn next_maintenance_date(last: NaiveDate, interval_days: u32) -> Result<NaiveDate, DateError> {
    last.checked_add_days(Days::new(u64::from(interval_days)))
        .ok_or(DateError::OutOfRange {
            date: last,
            days: interval_days,
        })
}

/// Строковый вариант [`next_maintenance_date`] для данных, пришедших в формате API
///
/// # Примеры
/// ```
/// use contracts::shared::maintenance::calculate_next_maintenance_date;
/// assert_eq!(
///     calculate_next_maintenance_date("2024-12-25", 10).unwrap(),
///     "2025-01-04"
/// );
/// ```
pub fn calculate_next_maintenance_date(
    last: &str,
    interval_days: u32,
) -> Result<String, DateError> {
    let last = parse_iso_date(last)?;
    next_maintenance_date(last, interval_days).map(format_iso_date)
}
