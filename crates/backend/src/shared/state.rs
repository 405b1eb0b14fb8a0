use chrono::NaiveDate;
use std::sync::Arc;

use super::clock::Clock;
use super::data::store::InMemoryStore;

/// Состояние приложения, передаётся в обработчики через axum `State`
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

#[cfg(test)]
impl AppState {
    /// Изолированное состояние с фиксированной датой
    pub fn fixed(today: &str) -> Self {
        let today = contracts::shared::maintenance::parse_iso_date(today).unwrap();
        Self::new(Arc::new(super::clock::FixedClock(today)))
    }
}
