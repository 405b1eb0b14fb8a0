use chrono::NaiveDate;

/// Источник "сегодняшней" даты для расчёта статусов и проверки дат
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Локальная дата сервера
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Фиксированная дата для тестов
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
